use cookscale::{
    convert::{UnitTableBuilder, UnitsFile},
    convert_with_density, default_units, CustomDensities, DensityTable,
};
use test_case::test_case;

const CUP_ML: f64 = 236.5882365;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn water_by_default() {
    let g = convert_with_density(236.59, "ml", "g", "water", &CustomDensities::new());
    assert!(close(g, 236.59));
    let g = convert_with_density(236.59, "ml", "g", "unobtainium", &CustomDensities::new());
    assert!(close(g, 236.59));
}

#[test_case(1.0, "cup", "g", "flour" => CUP_ML * 0.528; "volume to weight")]
#[test_case(200.0, "g", "cups", "Sugar" => 200.0 / 0.845 / CUP_ML; "weight to volume")]
#[test_case(1.0, "lb", "g", "flour" => 453.59237; "same class weight")]
#[test_case(2.0, "tbsp", "tsp", "milk" => 2.0 * 14.78676478125 / 4.92892159375; "same class volume")]
#[test_case(3.0, "pinch", "g", "salt" => 3.0; "unknown unit")]
#[test_case(2.0, "egg", "g", "egg" => 2.0; "count unit")]
fn built_in(value: f64, from: &str, to: &str, ingredient: &str) -> f64 {
    convert_with_density(value, from, to, ingredient, &CustomDensities::new())
}

#[test]
fn custom_wins() {
    let custom = CustomDensities::from_json(r#"{"Flour": 0.6, "oat milk": 1.03}"#).unwrap();
    let g = convert_with_density(1.0, "cup", "g", "flour", &custom);
    assert!(close(g, CUP_ML * 0.6));
    let g = convert_with_density(100.0, "ml", "g", "Oat Milk", &custom);
    assert!(close(g, 103.0));
}

#[test]
fn custom_changes_are_seen() {
    let mut custom = CustomDensities::new();
    let before = convert_with_density(1.0, "cup", "g", "honey", &custom);
    assert!(close(before, CUP_ML * 1.437));
    custom.insert("honey", 1.4);
    let after = convert_with_density(1.0, "cup", "g", "honey", &custom);
    assert!(close(after, CUP_ML * 1.4));
    custom.remove("honey");
    let again = convert_with_density(1.0, "cup", "g", "honey", &custom);
    assert!(close(again, before));
}

#[test]
fn invalid_custom_entries() {
    let custom = CustomDensities::from_json(r#"{"flour": -1, "salt": 0, "sugar": 0.9}"#).unwrap();
    assert_eq!(custom.len(), 1);
    assert!(CustomDensities::from_json("[1, 2]").is_err());
    assert!(CustomDensities::from_json("{").is_err());

    let table = DensityTable::merged(&custom);
    assert_eq!(table.density("flour"), Some(0.528));
    assert_eq!(table.density("sugar"), Some(0.9));
}

#[test]
fn json_round_trip() {
    let custom: CustomDensities = [("Honey", 1.4)].into_iter().collect();
    let json = custom.to_json().unwrap();
    assert_eq!(json, r#"{"honey":1.4}"#);
    assert_eq!(CustomDensities::from_json(&json).unwrap(), custom);
}

#[test]
fn custom_units_file() {
    let file = UnitsFile::from_toml(
        r#"
        [[units]]
        name = "stick"
        class = "weight"
        to_base = 113.0
        aliases = ["sticks of butter"]

        [extend.cup]
        aliases = ["mug"]
        "#,
    )
    .unwrap();
    let units = UnitTableBuilder::new()
        .with_bundled_units()
        .unwrap()
        .with_units_file(file)
        .unwrap()
        .finish();

    let densities = DensityTable::built_in();
    let ml = units.convert_with_density(1.0, "stick", "ml", "butter", &densities);
    assert!(close(ml, 113.0 / 0.959));
    assert!(close(units.convert(2.0, "mug", "ml").unwrap(), 2.0 * CUP_ML));
    assert!(default_units().find_unit("mug").is_none());
}
