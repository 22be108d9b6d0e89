use catalogctl_core::{
    parse_frontmatter, write_with_frontmatter, Catalog, CatalogConfig, User, WriteOptions,
};
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};
use tempfile::TempDir;

fn arb_id() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,24}"
}

// Plain text plus the characters YAML treats specially
fn arb_label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.:'\"#&*!?|>%@-]{0,40}"
}

fn arb_user() -> impl Strategy<Value = User> {
    (
        arb_id(),
        arb_label(),
        prop::option::of(arb_label()),
        prop::option::of(any::<bool>()),
        "(?s).{0,200}",
    )
        .prop_map(|(id, name, role, hidden, markdown)| User {
            role,
            hidden,
            ..User::new(id, name, markdown)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the codec gives back exactly what it was given
    #[test]
    fn prop_codec_is_lossless(
        pairs in prop::collection::vec((arb_id(), arb_label()), 0..8),
        body in "(?s).{0,300}",
    ) {
        let metadata: Mapping = pairs
            .into_iter()
            .map(|(k, v)| (Value::from(k), Value::from(v)))
            .collect();

        let written = write_with_frontmatter(&metadata, &body).unwrap();
        let (parsed, parsed_body) = parse_frontmatter(&written).unwrap();

        prop_assert_eq!(&parsed, &metadata);
        prop_assert_eq!(&parsed_body, &body);
        prop_assert_eq!(write_with_frontmatter(&parsed, &parsed_body).unwrap(), written);
    }

    /// Property: write then read returns the same user
    #[test]
    fn prop_user_round_trip(user in arb_user()) {
        let temp = TempDir::new().unwrap();
        let users = Catalog::new(CatalogConfig::with_root(temp.path())).users();

        users.write(&user, WriteOptions::default()).unwrap();
        let read = users.read(&user.id).unwrap();

        prop_assert_eq!(read, Some(user));
    }
}
