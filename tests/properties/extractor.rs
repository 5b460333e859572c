//! Property tests for component name extraction.

use proptest::prelude::*;

use cardsmith::extract_component_name;

fn component_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Extraction never panics, whatever the model returned.
    #[test]
    fn property_extract_never_panics(code in "[\\s\\S]{0,300}") {
        let _ = extract_component_name(&code);
    }

    /// PROPERTY: A single exported card class is always found.
    #[test]
    fn property_single_card_class_is_found(
        name in component_name(),
        base in proptest::sample::select(vec!["Card", "CardDef", "Component"]),
    ) {
        let code = format!(
            "import {{ Card }} from 'https://cardstack.com/base/card-api';\n\nexport class {name} extends {base} {{\n  static isolated = class extends Component {{}};\n}}\n"
        );
        prop_assert_eq!(extract_component_name(&code).unwrap(), name);
    }

    /// PROPERTY: Exports inside comments and strings never win over the real one.
    #[test]
    fn property_commented_exports_are_ignored(
        real in component_name(),
        decoy in component_name(),
    ) {
        let code = format!(
            "// export class {decoy} extends Card {{}}\n/* export default {decoy}; */\nconst s = 'export class {decoy} extends Card';\nexport class {real} extends Card {{}}\n"
        );
        prop_assert_eq!(extract_component_name(&code).unwrap(), real);
    }
}
