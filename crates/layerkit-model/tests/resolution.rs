use layerkit_model::{
    ColorValue, DefaultReason, ImageReference, PropertyValues, ResolutionContext, Value, Variable,
};
use proptest::prelude::*;
use serde_json::json;

fn sample_data() -> serde_json::Value {
    json!({
        "user": {"name": "Ada", "age": 36, "isMember": true},
        "items": [{"title": "first"}, {"title": "second"}]
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn absent_property_resolves_to_zero_values(name in "[a-zA-Z][a-zA-Z0-9_]{0,12}") {
        let mut values = PropertyValues::new();
        values.insert("__present".into(), Value::from("x"));
        let context = ResolutionContext::new().with_property_values(&values);

        prop_assert_eq!(Variable::<String>::property(name.clone()).resolve(&context), "");
        prop_assert_eq!(Variable::<f64>::property(name.clone()).resolve(&context), 0.0);
        prop_assert!(!Variable::<bool>::property(name.clone()).resolve(&context));
        prop_assert_eq!(
            Variable::<ColorValue>::property(name.clone()).resolve(&context),
            ColorValue::CLEAR
        );
        prop_assert!(Variable::<ImageReference>::property(name.clone()).resolve(&context).is_empty());

        prop_assert_eq!(Variable::<String>::property(name.clone()).resolve_strict(&context), None);
        prop_assert_eq!(Variable::<bool>::property(name).resolve_strict(&context), None);
    }

    #[test]
    fn paths_past_the_data_never_fail(
        head in prop::sample::select(vec!["user.name", "user.age", "items[1].title", "items.0.title"]),
        tail in "[a-z]{1,6}",
    ) {
        let data = sample_data();
        let context = ResolutionContext::new().with_data(&data);
        let key_path = format!("{head}.{tail}");

        let traced = Variable::<f64>::data(key_path.clone()).resolve_traced(&context);
        prop_assert_eq!(traced.value, 0.0);
        prop_assert_eq!(
            traced.fallback.map(|defaulted| defaulted.reason),
            Some(DefaultReason::UnresolvedKeyPath)
        );
        prop_assert_eq!(Variable::<String>::data(key_path.clone()).resolve(&context), "");
        prop_assert_eq!(Variable::<String>::data(key_path).resolve_strict(&context), None);
    }

    #[test]
    fn out_of_range_indexes_default(index in 2usize..1000) {
        let data = sample_data();
        let context = ResolutionContext::new().with_data(&data);
        let variable = Variable::<String>::data(format!("items[{index}].title"));
        prop_assert_eq!(variable.resolve(&context), "");
    }

    #[test]
    fn numeric_literals_round_trip(
        number in any::<f64>().prop_filter("finite", |number| number.is_finite()),
    ) {
        let variable = Variable::literal(number);
        let encoded = serde_json::to_string(&variable).unwrap();
        let decoded: Variable<f64> = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, variable);
    }
}

#[test]
fn resolution_does_not_touch_the_variable() {
    let data = sample_data();
    let context = ResolutionContext::new().with_data(&data);
    let variable = Variable::<String>::data("user.name");
    let before = variable.clone();

    assert_eq!(variable.resolve(&context), "Ada");
    assert_eq!(variable.resolve(&context), "Ada");
    assert_eq!(variable, before);
}

#[test]
fn property_and_data_share_one_context() {
    let data = sample_data();
    let mut values = PropertyValues::new();
    values.insert("greeting".into(), Value::from("Hello"));
    let context = ResolutionContext::new()
        .with_property_values(&values)
        .with_data(&data);

    assert_eq!(Variable::<String>::property("greeting").resolve(&context), "Hello");
    assert_eq!(Variable::<bool>::data("user.isMember").resolve_strict(&context), Some(true));
    assert_eq!(Variable::<String>::data("items[0].title").resolve(&context), "first");
}
