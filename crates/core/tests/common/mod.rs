#![allow(dead_code)]

use chrono::NaiveDate;
use rollcall_core::{
    auth::CredentialVerifier,
    date::DateKey,
    models::member::Member,
    store::{MemberStore, memory::MemoryStore},
};

pub const SECRET: &str = "letmein";

/// Plain equality against a fixed secret.
pub struct StaticSecret(pub &'static str);

impl CredentialVerifier for StaticSecret {
    fn verify(&self, candidate: &str) -> bool {
        candidate == self.0
    }
}

pub fn day(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

pub fn today() -> DateKey {
    day(2024, 6, 3)
}

pub async fn store_with(names: &[&str]) -> (MemoryStore, Vec<Member>) {
    let store = MemoryStore::new();
    let mut members = Vec::new();
    for name in names {
        members.push(store.create_member(name).await.unwrap());
    }
    (store, members)
}
