use crate::core::{faker, sql};
use crate::domain::model::{Address, AddressBatch, AddressRef};
use crate::domain::settings::SeedSettings;
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::validate_positive_number;
use rand::Rng;
use std::collections::HashMap;

/// 連續多少次抽到已滿的城市就放棄
pub const MAX_CITY_REJECTIONS: usize = 10_000;

/// 產生剛好 `address_count` 筆地址，每個城市一次補滿 `min_addresses_per_city` 筆。
///
/// 已經達到下限的城市會被跳過；假城市池太小時改回傳
/// [`SeedError::CityPoolExhausted`] 而不是無限迴圈。
pub fn generate_addresses<R: Rng + ?Sized>(
    settings: &SeedSettings,
    rng: &mut R,
) -> Result<AddressBatch> {
    validate_positive_number("generator.address_count", settings.address_count, 1)?;
    validate_positive_number(
        "generator.min_addresses_per_city",
        settings.min_addresses_per_city,
        1,
    )?;

    let target = settings.address_count;
    let min_per_city = settings.min_addresses_per_city;

    let mut per_city: HashMap<String, usize> = HashMap::new();
    let mut addresses: Vec<Address> = Vec::with_capacity(target);
    let mut next_id: u32 = 1;
    let mut rejections = 0usize;

    while addresses.len() < target {
        let city = faker::city(rng);
        let state = faker::state(rng);

        if per_city.get(&city).copied().unwrap_or(0) >= min_per_city {
            rejections += 1;
            if rejections >= MAX_CITY_REJECTIONS {
                return Err(SeedError::CityPoolExhausted {
                    attempts: rejections,
                    min_per_city,
                });
            }
            continue;
        }
        rejections = 0;

        for _ in 0..min_per_city {
            if addresses.len() >= target {
                break;
            }

            addresses.push(Address {
                id: next_id,
                street_address: faker::street_address(rng),
                city: city.clone(),
                state: state.clone(),
                postal_code: faker::zipcode(rng),
            });
            *per_city.entry(city.clone()).or_insert(0) += 1;
            next_id += 1;
        }
    }

    tracing::debug!(
        "Generated {} addresses across {} cities",
        addresses.len(),
        per_city.len()
    );

    let refs = addresses.iter().map(AddressRef::from).collect();
    let insert_statement = sql::address_insert(&addresses);

    Ok(AddressBatch {
        addresses,
        refs,
        insert_statement,
    })
}
