mod common;

use common::GardenBuilder;
use garden_core::GardenError;
use garden_data::MAX_VITALITY;

#[test]
fn test_purchase_water_and_ten_ticks() {
    let mut session = GardenBuilder::new().with_coins(30).without_chance().build();

    let slot = session.purchase("sprout").unwrap();
    assert_eq!(slot, 0);
    assert_eq!(session.coins(), 20);
    let plant = session.plant(0).unwrap();
    assert_eq!(
        (plant.health, plant.hunger, plant.age, plant.level),
        (MAX_VITALITY, MAX_VITALITY, 0, 1)
    );

    assert!(session.water(0).unwrap());
    let plant = session.plant(0).unwrap();
    assert_eq!(plant.health, 100, "watering clamps at the maximum");
    assert_eq!(plant.age, 1);

    for _ in 0..10 {
        session.tick();
    }
    let plant = session.plant(0).unwrap();
    assert_eq!(plant.health, 80);
    assert_eq!(plant.hunger, 70);
    assert_eq!(plant.age, 11);
    assert_eq!(session.coins(), 20);
}

#[test]
fn test_purchase_without_funds_changes_nothing() {
    let mut session = GardenBuilder::new().with_coins(5).build();

    let err = session.purchase("sprout").unwrap_err();
    assert_eq!(
        err,
        GardenError::InsufficientFunds {
            required: 10,
            available: 5
        }
    );
    assert_eq!(session.coins(), 5);
    assert_eq!(session.snapshot().occupied_count(), 0);
    assert_eq!(session.store().writes(), 0);
}

#[test]
fn test_full_garden_rejects_purchase() {
    let mut session = GardenBuilder::new().with_coins(100).build();
    for id in ["sprout", "cactus", "bloom"] {
        session.purchase(id).unwrap();
    }
    let before = session.snapshot();

    assert_eq!(session.purchase("sprout"), Err(GardenError::GardenFull));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_plants_never_die_from_neglect() {
    let mut session = GardenBuilder::new().with_coins(10).without_chance().build();
    session.purchase("sprout").unwrap();
    for _ in 0..200 {
        session.tick();
    }
    let plant = session.plant(0).unwrap();
    assert_eq!((plant.health, plant.hunger), (0, 0));
    assert_eq!(plant.age, 200);
}

#[test]
fn test_harvest_pays_and_costs_vitality() {
    let mut session = GardenBuilder::new().with_coins(10).without_chance().build();
    session.purchase("sprout").unwrap();

    let outcome = session.harvest(0).unwrap().unwrap();
    // level 1 at full happiness: round(1 * 100 / 50)
    assert_eq!(outcome.coins, 2);
    assert!(!outcome.leveled_up);
    assert_eq!(session.coins(), 2);

    let plant = session.plant(0).unwrap();
    assert_eq!(plant.health, 80);
    assert_eq!(plant.hunger, 70);
}

#[test]
fn test_guaranteed_level_up_stops_at_max() {
    let mut session = GardenBuilder::new()
        .with_coins(10)
        .with_config(|c| {
            c.rules.level_up_chance = 1.0;
            c.rules.max_level = 3;
        })
        .build();
    session.purchase("sprout").unwrap();
    for _ in 0..5 {
        session.water(0).unwrap();
        session.feed(0).unwrap();
        session.harvest(0).unwrap();
    }
    assert_eq!(session.plant(0).unwrap().level, 3);
}

#[test]
fn test_same_seed_same_run() {
    let run = |seed| {
        let mut session = GardenBuilder::new().with_seed(seed).with_coins(60).build();
        session.purchase("bloom").unwrap();
        session.purchase("cactus").unwrap();
        for i in 0..50 {
            session.water(i % 2).unwrap();
            session.tick();
            if i % 7 == 0 {
                session.harvest(0).unwrap();
            }
        }
        let state = session.snapshot();
        let plants: Vec<_> = state
            .garden
            .iter()
            .map(|slot| {
                slot.plant()
                    .map(|p| (p.organism_id.clone(), p.health, p.hunger, p.age, p.level))
            })
            .collect();
        (state.coins, plants)
    };
    let (coins_a, plants_a) = run(9);
    let (coins_b, plants_b) = run(9);
    assert_eq!(coins_a, coins_b);
    assert_eq!(plants_a, plants_b);
    assert!(plants_a[0].is_some() && plants_a[1].is_some());
}

#[test]
fn test_daily_bonus_once_per_day() {
    let mut session = GardenBuilder::new().with_coins(0).build();
    let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    assert_eq!(session.claim_daily(today), Ok(10));
    assert_eq!(
        session.claim_daily(today),
        Err(GardenError::DailyBonusClaimed(today))
    );
    assert_eq!(session.claim_daily(today.succ_opt().unwrap()), Ok(10));
    assert_eq!(session.coins(), 20);
}
