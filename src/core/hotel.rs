use crate::core::{address, faker, sql};
use crate::domain::model::{
    AddressId, AddressRef, CityGroups, CityKey, GeneratedSeed, Hotel, UsedAddresses,
};
use crate::domain::settings::SeedSettings;
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::Validate;
use rand::seq::SliceRandom;
use rand::Rng;

/// 依 (city, state) 分組，保留 `refs` 的順序
pub fn group_by_city(refs: &[AddressRef]) -> CityGroups {
    let mut groups = CityGroups::new();
    for reference in refs {
        groups
            .entry(CityKey {
                city: reference.city.clone(),
                state: reference.state.clone(),
            })
            .or_default()
            .push(reference.id);
    }
    groups
}

fn fake_hotel<R: Rng + ?Sized>(rng: &mut R, chain_id: u32, address_id: AddressId) -> Hotel {
    Hotel {
        chain_id,
        name: format!("{} Hotel", faker::company(rng)),
        address_id,
        email: faker::email(rng),
        phone_number: faker::phone_number(rng),
        category: rng.gen_range(1..=5),
    }
}

/// 把 hotel 分配給各連鎖。
///
/// 每個連鎖先挑 `hotels_per_chain / min_hotels_per_area` 個不同的地區，
/// 每區最多取 `min_hotels_per_area` 個未使用的地址；不足的部分再從整個
/// 地址池隨機補滿。`refs` 會被就地洗牌。
pub fn assign_hotels<R: Rng + ?Sized>(
    settings: &SeedSettings,
    refs: &mut [AddressRef],
    rng: &mut R,
) -> Result<Vec<Hotel>> {
    if settings.min_hotels_per_area == 0 {
        return Err(SeedError::InvalidConfigValueError {
            field: "generator.min_hotels_per_area".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        });
    }
    if refs.len() <= settings.total_hotels() {
        return Err(SeedError::AddressPoolTooSmall {
            addresses: refs.len(),
            hotels: settings.total_hotels(),
        });
    }

    refs.shuffle(rng);

    let per_chain = settings.hotels_per_chain;
    let per_area = settings.min_hotels_per_area;
    let mut used = UsedAddresses::new();
    let mut hotels = Vec::with_capacity(settings.total_hotels());

    for chain_id in 1..=settings.chain_count as u32 {
        let mut chain_hotels: Vec<Hotel> = Vec::with_capacity(per_chain);
        let groups = group_by_city(refs);
        let keys: Vec<&CityKey> = groups.keys().collect();

        let area_count = keys.len().min(per_chain / per_area);
        let selected: Vec<&CityKey> = keys.choose_multiple(rng, area_count).copied().collect();

        for key in selected {
            let available: Vec<AddressId> = groups[key]
                .iter()
                .copied()
                .filter(|id| !used.contains(id))
                .collect();
            let take = per_area.min(available.len());
            let picked: Vec<AddressId> = available.choose_multiple(rng, take).copied().collect();

            for address_id in picked {
                used.insert(address_id);
                chain_hotels.push(fake_hotel(rng, chain_id, address_id));
            }
        }

        let clustered = chain_hotels.len();

        while chain_hotels.len() < per_chain {
            let candidates: Vec<AddressId> = refs
                .iter()
                .map(|r| r.id)
                .filter(|id| !used.contains(id))
                .collect();
            let address_id = *candidates
                .choose(rng)
                .ok_or(SeedError::AddressPoolExhausted { chain_id })?;

            used.insert(address_id);
            chain_hotels.push(fake_hotel(rng, chain_id, address_id));
        }

        tracing::debug!(
            "Chain {}: {} clustered, {} backfilled",
            chain_id,
            clustered,
            chain_hotels.len() - clustered
        );

        chain_hotels.truncate(per_chain);
        hotels.extend(chain_hotels);
    }

    Ok(hotels)
}

/// 產生地址與 hotel 並輸出兩段 INSERT。
pub fn generate_hotels<R: Rng + ?Sized>(
    settings: &SeedSettings,
    seed: u64,
    rng: &mut R,
) -> Result<GeneratedSeed> {
    settings.validate()?;

    let mut batch = address::generate_addresses(settings, rng)?;
    let hotels = assign_hotels(settings, &mut batch.refs, rng)?;
    let hotel_statement = sql::hotel_insert(&hotels);

    tracing::info!(
        "🏨 Generated {} addresses and {} hotels for {} chains",
        batch.addresses.len(),
        hotels.len(),
        settings.chain_count
    );

    Ok(GeneratedSeed {
        generated_at: chrono::Utc::now(),
        seed,
        addresses: batch.addresses,
        hotels,
        address_statement: batch.insert_statement,
        hotel_statement,
    })
}
