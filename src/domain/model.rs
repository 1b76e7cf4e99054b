use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

pub type AddressId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// (id, city, state)，交給 hotel 分配使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRef {
    pub id: AddressId,
    pub city: String,
    pub state: String,
}

impl From<&Address> for AddressRef {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id,
            city: address.city.clone(),
            state: address.state.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityKey {
    pub city: String,
    pub state: String,
}

/// (city, state) -> 該地區的 address id，依出現順序
pub type CityGroups = BTreeMap<CityKey, Vec<AddressId>>;

pub type UsedAddresses = HashSet<AddressId>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub chain_id: u32,
    pub name: String,
    pub address_id: AddressId,
    pub email: String,
    pub phone_number: String,
    pub category: u8,
}

#[derive(Debug, Clone)]
pub struct AddressBatch {
    pub addresses: Vec<Address>,
    pub refs: Vec<AddressRef>,
    pub insert_statement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSeed {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub seed: u64,
    pub addresses: Vec<Address>,
    pub hotels: Vec<Hotel>,
    #[serde(skip)]
    pub address_statement: String,
    #[serde(skip)]
    pub hotel_statement: String,
}

impl GeneratedSeed {
    /// 兩段 INSERT，address 在前
    pub fn sql_script(&self) -> String {
        format!("{}\n{}\n", self.address_statement, self.hotel_statement)
    }
}
