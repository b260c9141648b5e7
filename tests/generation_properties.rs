//! Property tests for generated dungeons.

use delve::{
    generate, l_path, overlaps, reachable_from, rooms_collide, Dungeon, DungeonGenerator,
    GenerationConfig, Generator, Tile,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Configs whose room sizes always fit the map.
fn config_strategy() -> impl Strategy<Value = GenerationConfig> {
    (10u32..60, 10u32..60, 1u32..30, 0u32..400, any::<u64>()).prop_flat_map(
        |(width, height, room_count, attempt_cap, seed)| {
            let limit = width.min(height) - 2;
            (1..=limit).prop_flat_map(move |min| {
                (min..=limit).prop_map(move |max| {
                    GenerationConfig::new(seed)
                        .with_size(width, height)
                        .with_room_count(room_count)
                        .with_room_size(min, max)
                        .with_attempt_cap(attempt_cap)
                })
            })
        },
    )
}

fn build(config: &GenerationConfig) -> Dungeon {
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate(config, &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rooms_keep_border(config in config_strategy()) {
        let dungeon = build(&config);
        prop_assert!(dungeon.rooms.len() <= config.room_count as usize);
        for room in &dungeon.rooms {
            prop_assert!(room.top_left.x >= 1);
            prop_assert!(room.top_left.y >= 1);
            prop_assert!(room.top_left.x + room.width as i32 + 1 <= config.width as i32);
            prop_assert!(room.top_left.y + room.height as i32 + 1 <= config.height as i32);
            prop_assert!(room.width >= config.min_room_size && room.width <= config.max_room_size);
            prop_assert!(room.height >= config.min_room_size && room.height <= config.max_room_size);
        }
    }

    #[test]
    fn rooms_never_overlap(config in config_strategy()) {
        let dungeon = build(&config);
        for (i, a) in dungeon.rooms.iter().enumerate() {
            for (j, b) in dungeon.rooms.iter().enumerate() {
                if i != j {
                    prop_assert!(!rooms_collide(a, b), "{:?} collides with {:?}", a, b);
                }
            }
            let others: Vec<_> = dungeon.rooms.iter().filter(|r| r.id != a.id).cloned().collect();
            prop_assert!(!overlaps(a, &others));
        }
    }

    #[test]
    fn rooms_and_corridors_are_floor(config in config_strategy()) {
        let dungeon = build(&config);
        for room in &dungeon.rooms {
            for pos in room.positions() {
                prop_assert_eq!(dungeon.grid.tile_at(pos), Some(Tile::Floor));
            }
        }
        for pair in dungeon.rooms.windows(2) {
            for pos in l_path(pair[0].center(), pair[1].center()) {
                prop_assert_eq!(dungeon.grid.tile_at(pos), Some(Tile::Floor));
            }
        }
    }

    #[test]
    fn generation_is_deterministic(config in config_strategy()) {
        prop_assert_eq!(build(&config), build(&config));
    }

    #[test]
    fn room_chain_is_connected(config in config_strategy()) {
        let dungeon = build(&config);
        if let Some(start) = dungeon.start_room() {
            let visited = reachable_from(&dungeon.grid, start.center());
            for room in &dungeon.rooms {
                prop_assert!(visited.contains(&room.center()));
            }
            // Only rooms and corridors are carved, and they are all linked
            prop_assert_eq!(visited.len(), dungeon.grid.count(Tile::Floor));
        } else {
            prop_assert_eq!(dungeon.grid.count(Tile::Floor), 0);
        }
        prop_assert!(DungeonGenerator::new().validate(&dungeon, &config).is_ok());
    }

    #[test]
    fn oversized_rooms_are_rejected(width in 3u32..30, height in 3u32..30, extra in 0u32..10) {
        let max = width.min(height) - 1 + extra;
        let config = GenerationConfig::new(0)
            .with_size(width, height)
            .with_room_size(1, max);
        let mut rng = StdRng::seed_from_u64(0);
        prop_assert!(generate(&config, &mut rng).is_err());
    }
}
