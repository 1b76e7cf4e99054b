use crate::domain::model::{Address, Hotel};

pub const ADDRESS_INSERT_HEADER: &str =
    "INSERT INTO Address (street_address, city, state, postal_code) VALUES\n";
pub const HOTEL_INSERT_HEADER: &str =
    "INSERT INTO Hotel (chain_id, name, address_id, email, phone_number, category) VALUES\n";

/// 每個值都包在單引號裡，不做跳脫
fn tuple(values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
    format!("({})", quoted.join(", "))
}

pub fn address_tuple(address: &Address) -> String {
    tuple(&[
        &address.street_address,
        &address.city,
        &address.state,
        &address.postal_code,
    ])
}

pub fn hotel_tuple(hotel: &Hotel) -> String {
    tuple(&[
        &hotel.chain_id.to_string(),
        &hotel.name,
        &hotel.address_id.to_string(),
        &hotel.email,
        &hotel.phone_number,
        &hotel.category.to_string(),
    ])
}

pub fn bulk_insert(header: &str, tuples: &[String]) -> String {
    format!("{}{};", header, tuples.join(",\n"))
}

pub fn address_insert(addresses: &[Address]) -> String {
    let tuples: Vec<String> = addresses.iter().map(address_tuple).collect();
    bulk_insert(ADDRESS_INSERT_HEADER, &tuples)
}

pub fn hotel_insert(hotels: &[Hotel]) -> String {
    let tuples: Vec<String> = hotels.iter().map(hotel_tuple).collect();
    bulk_insert(HOTEL_INSERT_HEADER, &tuples)
}
