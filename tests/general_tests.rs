use cookscale::{
    error::{ParseError, SkipReason},
    parse_recipe, IngredientParser, Patterns, UnitTable,
};
use indoc::indoc;
use test_case::test_case;

#[test]
fn standard_line() {
    let ingredients = parse_recipe("2 cups flour");
    assert_eq!(ingredients.len(), 1);
    let flour = &ingredients[0];
    assert_eq!(flour.quantity, 2.0);
    assert_eq!(flour.unit, "cups");
    assert_eq!(flour.name, "Flour");
    assert_eq!(flour.raw_qty, "2");
}

#[test]
fn suffix_glued() {
    let ingredients = parse_recipe("Baking powder 2½tsp");
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].name, "Baking powder");
    assert_eq!(ingredients[0].unit, "teaspoons");
    assert!((ingredients[0].quantity - 2.5).abs() < 1e-9);
}

#[test]
fn count_item() {
    let ingredients = parse_recipe("3 eggs");
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].unit, "");
    assert_eq!(ingredients[0].quantity, 3.0);
    assert_eq!(ingredients[0].name, "Eggs");
    assert!(ingredients[0].is_count());
}

#[test_case("asdkjh"; "garbage")]
#[test_case(""; "empty")]
#[test_case("\n\n   \n"; "blank lines")]
#[test_case("Preheat the oven\nMix everything"; "instructions")]
#[test_case("0 cups flour"; "zero quantity")]
fn nothing_parsed(text: &str) {
    assert!(parse_recipe(text).is_empty());
}

#[test]
fn full_recipe() {
    let text = indoc! {"
        Ingredients
        - 2 1/2 cups all-purpose flour
        - 1 cup gran. sugar
        • Butter (½ cup, softened)
        * Salt: 1 tsp
        - 2 large eggs
        Vanilla ext. 1tsp
        milk > 1 cup, warm
        1 T honey [optional]
        Bake for 30 minutes
    "};
    let ingredients = parse_recipe(text);
    let got: Vec<_> = ingredients
        .iter()
        .map(|i| (i.quantity, i.unit.as_str(), i.name.as_str()))
        .collect();
    assert_eq!(
        got,
        [
            (2.5, "cups", "All-purpose flour"),
            (1.0, "cup", "Granulated sugar"),
            (0.5, "cups", "Butter (softened)"),
            (1.0, "teaspoon", "Salt"),
            (2.0, "", "Large eggs"),
            (1.0, "teaspoon", "Vanilla extract"),
            (1.0, "cup", "Milk, warm"),
            (1.0, "tablespoon", "Honey optional"),
        ]
    );
}

#[test]
fn order_is_kept() {
    let text = indoc! {"
        3 eggs
        2 cups flour
        1 tsp salt
    "};
    let names: Vec<_> = parse_recipe(text).into_iter().map(|i| i.name).collect();
    assert_eq!(names, ["Eggs", "Flour", "Salt"]);
}

#[test]
fn inline_list() {
    let ingredients = parse_recipe("Flour (200 g), Sugar (100 g), Butter (2 tbsp, melted)");
    let got: Vec<_> = ingredients
        .iter()
        .map(|i| (i.quantity, i.unit.as_str(), i.name.as_str()))
        .collect();
    assert_eq!(
        got,
        [
            (200.0, "grams", "Flour"),
            (100.0, "grams", "Sugar"),
            (2.0, "tablespoons", "Butter (melted)"),
        ]
    );
}

#[test]
fn bad_lines_do_not_stop_parsing() {
    let text = indoc! {"
        2 cups flour
        ???
        1/0 cup sugar
        3 eggs
    "};
    let parser = IngredientParser::default();
    let res = parser.parse(text);
    assert_eq!(res.ingredients().len(), 2);
    let reasons: Vec<_> = res.skipped().iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        [SkipReason::NoMatch, SkipReason::NonPositiveQuantity]
    );
}

#[test]
fn no_ingredients_error() {
    let parser = IngredientParser::default();
    let err = parser.parse("asdkjh").into_result().unwrap_err();
    assert!(matches!(err, ParseError::NoIngredients { skipped: 1 }));
}

#[test]
fn only_count_patterns() {
    let parser = IngredientParser::new(Patterns::COUNT, UnitTable::bundled());
    let ingredients = parser.parse("2 cups flour\neggs 3").into_result().unwrap();
    assert_eq!(ingredients[0].unit, "");
    assert_eq!(ingredients[0].name, "Cups flour");
    assert_eq!(ingredients[1].name, "Eggs");
    assert_eq!(ingredients[1].quantity, 3.0);
}

#[test]
fn without_units() {
    let parser = IngredientParser::new(Patterns::all(), UnitTable::empty());
    let ingredients = parser.parse("2 cups flour").into_result().unwrap();
    assert_eq!(ingredients[0].unit, "");
    assert_eq!(ingredients[0].name, "Cups flour");
}

#[test]
fn json() {
    let ingredients = parse_recipe("½ cup sugar");
    let value = serde_json::to_value(&ingredients).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "quantity": 0.5,
            "unit": "cups",
            "name": "Sugar",
            "rawQty": "½"
        }])
    );
}
