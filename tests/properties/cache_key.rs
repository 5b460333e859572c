//! Property tests for response cache keys.

use proptest::prelude::*;

use cardsmith::domain::entities::Prompt;
use cardsmith::domain::value_objects::CacheKey;

fn model() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9.\\-]{1,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The same model and messages always produce the same key.
    #[test]
    fn property_key_is_deterministic(
        model in model(),
        system in proptest::option::of(".{0,40}"),
        user in ".{0,80}",
    ) {
        let a = CacheKey::new(&model, &Prompt::new(system.as_deref(), user.clone()));
        let b = CacheKey::new(&model, &Prompt::new(system.as_deref(), user));
        prop_assert_eq!(a.digest(), b.digest());
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: Different models never share a key for the same prompt.
    #[test]
    fn property_model_is_part_of_key(
        first in model(),
        second in model(),
        user in ".{0,80}",
    ) {
        prop_assume!(first != second);
        let prompt = Prompt::new(None, user);
        prop_assert_ne!(
            CacheKey::new(&first, &prompt).digest(),
            CacheKey::new(&second, &prompt).digest()
        );
    }

    /// PROPERTY: The digest is `sha256:` followed by the 64-hex file stem.
    #[test]
    fn property_digest_shape(model in model(), user in ".{0,80}") {
        let key = CacheKey::new(&model, &Prompt::new(None, user));
        let stem = key.file_stem();
        prop_assert_eq!(stem.len(), 64);
        prop_assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
        prop_assert_eq!(key.digest(), format!("{}{}", CacheKey::DIGEST_PREFIX, stem));
    }
}
