//src/hero/src/names.rs
use combat::RandomSource;

const HERO_NAME_PREFIXES: [&str; 25] = [
    "Aether", "Blaze", "Cryo", "Draco", "Ember", "Frost", "Gale", "Hydra", "Ignis", "Jolt", "Kyro",
    "Luna", "Magma", "Nova", "Orion", "Pyro", "Quake", "Ripple", "Storm", "Terra", "Umbra", "Volt",
    "Wisp", "Xenon", "Zephyr",
];

const HERO_NAME_SUFFIXES: [&str; 22] = [
    "blade",
    "caster",
    "defender",
    "enforcer",
    "fury",
    "guardian",
    "hunter",
    "immortal",
    "juggernaut",
    "knight",
    "lord",
    "master",
    "ninja",
    "oracle",
    "phantom",
    "quester",
    "ranger",
    "slayer",
    "titan",
    "vanquisher",
    "warden",
    "zealot",
];

/// 随机生成 "前缀 后缀" 形式的英雄名字
pub fn generate_random_hero_name<R: RandomSource>(rng: &mut R) -> String {
    let prefix = rng.choose(&HERO_NAME_PREFIXES).copied().unwrap_or_default();
    let suffix = rng.choose(&HERO_NAME_SUFFIXES).copied().unwrap_or_default();
    format!("{prefix} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::BattleRng;

    #[test]
    fn test_random_names_use_both_lists() {
        let mut rng = BattleRng::new(31);
        for _ in 0..200 {
            let name = generate_random_hero_name(&mut rng);
            let (prefix, suffix) = name.split_once(' ').unwrap();
            assert!(HERO_NAME_PREFIXES.contains(&prefix), "unknown prefix {prefix}");
            assert!(HERO_NAME_SUFFIXES.contains(&suffix), "unknown suffix {suffix}");
        }
    }

    #[test]
    fn test_seeded_names_repeat() {
        let first = generate_random_hero_name(&mut BattleRng::new(5));
        let second = generate_random_hero_name(&mut BattleRng::new(5));
        assert_eq!(first, second);
    }
}
