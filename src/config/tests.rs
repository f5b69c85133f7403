use std::collections::HashMap;

use super::Config;

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map = vars.iter().copied().collect::<HashMap<_, _>>();
    move |key| map.get(key).map(|v| v.to_string())
}

#[test]
fn defaults() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.initial, "1,6,4,7,2,8");
    assert_eq!((config.value_min, config.value_max), (-1000, 1000));
    assert_eq!((config.window_width, config.window_height), (950, 750));
    assert_eq!(config.font, None);
}

#[test]
fn every_variable() {
    let config = Config::from_lookup(lookup(&[
        ("SEGTREE_INITIAL", "5,5,5"),
        ("SEGTREE_VALUE_MIN", "-50"),
        ("SEGTREE_VALUE_MAX", " 50 "),
        ("SEGTREE_WINDOW_WIDTH", "1280"),
        ("SEGTREE_WINDOW_HEIGHT", "720"),
        ("SEGTREE_FONT", "/usr/share/fonts/mono.ttf"),
    ]))
    .unwrap();

    assert_eq!(
        config,
        Config {
            initial: "5,5,5".into(),
            value_min: -50,
            value_max: 50,
            window_width: 1280,
            window_height: 720,
            font: Some("/usr/share/fonts/mono.ttf".into()),
        }
    );
}

#[test]
fn bad_values() {
    assert!(Config::from_lookup(lookup(&[("SEGTREE_VALUE_MIN", "low")])).is_err());
    assert!(Config::from_lookup(lookup(&[("SEGTREE_WINDOW_WIDTH", "-1")])).is_err());
    assert!(Config::from_lookup(lookup(&[
        ("SEGTREE_VALUE_MIN", "10"),
        ("SEGTREE_VALUE_MAX", "9"),
    ]))
    .is_err());

    let blank_font = Config::from_lookup(lookup(&[("SEGTREE_FONT", "  ")])).unwrap();
    assert_eq!(blank_font.font, None);
}
