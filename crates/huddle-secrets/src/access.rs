//! Participant access allocation.
//!
//! One secret per numbered participant slot. The mapping is dense and
//! complete: provisioning `n` slots always yields exactly the ids
//! `1..=n`, each bound to its own fresh secret.

use crate::generator::{self, Secret};
use huddle_types::{ParticipantId, Result};
use std::collections::BTreeMap;

/// The full slot-to-secret mapping for one deployment.
#[derive(Debug, Clone)]
pub struct ParticipantAccess {
    slots: BTreeMap<ParticipantId, Secret>,
}

impl ParticipantAccess {
    /// Provision `n` slots, each with a fresh secret of `secret_length`.
    ///
    /// # Errors
    ///
    /// Returns an error when `n` is zero or the secret length is invalid.
    pub fn provision(n: usize, secret_length: usize) -> Result<Self> {
        if n == 0 {
            return Err(huddle_types::HuddleError::Config(
                "At least one participant slot is required".to_string(),
            ));
        }
        let slot_count = u32::try_from(n).map_err(|_| {
            huddle_types::HuddleError::Config(format!("Too many participant slots: {}", n))
        })?;

        let mut slots = BTreeMap::new();
        for i in 1..=slot_count {
            let id = ParticipantId::new(i)?;
            slots.insert(id, generator::generate(secret_length)?);
        }

        tracing::info!(slots = n, "Provisioned participant access");

        Ok(Self { slots })
    }

    /// Look up the secret assigned to a slot.
    pub fn get(&self, id: ParticipantId) -> Option<&Secret> {
        self.slots.get(&id)
    }

    /// Number of provisioned slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether any slots exist. Provisioned mappings are never empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate slots in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &Secret)> {
        self.slots.iter().map(|(id, s)| (*id, s))
    }

    /// Serialize the mapping for the launch environment.
    ///
    /// Produces `id=secret` pairs joined by commas, ascending by id, e.g.
    /// `1=aB3...,2=Zk9...`. Consumed by the launch script as
    /// `HUDDLE_PARTICIPANTS_ACCESS`.
    pub fn to_export(&self) -> String {
        self.slots
            .iter()
            .map(|(id, secret)| format!("{}={}", id, secret))
            .collect::<Vec<_>>()
            .join(",")
    }
}
