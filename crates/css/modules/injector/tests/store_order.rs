use anyhow::{Result, bail};
use css_core::{Declarations, Rule, Variant};
use css_identity::Hashing;
use css_injector::{Injector, RuleStore, VirtualInjector};
use css_precedence::calculate_precedence;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_rules() -> Vec<(&'static str, Rule)> {
    let text_center = || Declarations::new().with("text-align", "center");
    vec![
        (
            "lg:text-center",
            Rule::new(text_center()).with_variant(Variant::media("(min-width: 992px)")),
        ),
        ("hover:text-center", Rule::new(text_center()).with_variant(Variant::pseudo("hover"))),
        (
            "sm:text-center",
            Rule::new(text_center()).with_variant(Variant::media("(min-width: 576px)")),
        ),
        ("text-center", Rule::new(text_center())),
        ("link:text-center", Rule::new(text_center()).with_variant(Variant::pseudo("link"))),
        (
            "border",
            Rule::new(Declarations::new().with("border-width", "1px")),
        ),
        (
            "border-l",
            Rule::new(Declarations::new().with("border-left-width", "1px")),
        ),
        (
            "p-4",
            Rule::new(
                Declarations::new()
                    .with("padding-top", "1rem")
                    .with("padding-bottom", "1rem"),
            ),
        ),
    ]
}

#[test]
fn target_is_sorted_regardless_of_call_order() {
    init();
    let rules = sample_rules();
    let mut forward = RuleStore::new(VirtualInjector::new(), Hashing::default());
    for (token, rule) in &rules {
        forward.resolve(token, rule);
    }
    let mut backward = RuleStore::new(VirtualInjector::new(), Hashing::default());
    for (token, rule) in rules.iter().rev() {
        backward.resolve(token, rule);
    }

    assert!(forward.precedences().is_sorted());
    assert!(backward.precedences().is_sorted());
    assert_eq!(forward.precedences(), backward.precedences());
    assert_eq!(forward.len(), rules.len());

    let mut expected: Vec<u64> = rules
        .iter()
        .map(|(_, rule)| calculate_precedence(&rule.variants, &rule.declarations))
        .collect();
    expected.sort_unstable();
    assert_eq!(forward.precedences(), expected.as_slice());
}

#[test]
fn larger_breakpoint_is_emitted_after_smaller() {
    init();
    let mut store = RuleStore::new(VirtualInjector::new(), Hashing::default());
    let rules = sample_rules();
    let (lg_token, lg_rule) = &rules[0];
    let (sm_token, sm_rule) = &rules[2];
    let lg = store.resolve(lg_token, lg_rule);
    let sm = store.resolve(sm_token, sm_rule);
    assert_ne!(lg, sm);
    assert_eq!(
        store.injector().rules(),
        [
            format!("@media (min-width: 576px){{.{sm}{{text-align:center}}}}"),
            format!("@media (min-width: 992px){{.{lg}{{text-align:center}}}}"),
        ]
    );
}

#[test]
fn hover_is_emitted_after_link() {
    init();
    let mut store = RuleStore::new(VirtualInjector::new(), Hashing::Verbatim);
    let rules = sample_rules();
    store.resolve(rules[1].0, &rules[1].1);
    store.resolve(rules[4].0, &rules[4].1);
    assert_eq!(
        store.injector().rules(),
        [
            ".link\\:text-center:link{text-align:center}",
            ".hover\\:text-center:hover{text-align:center}",
        ]
    );
}

/// Rejects every rule containing `invalid`.
#[derive(Debug, Default)]
struct PickyInjector {
    inner: VirtualInjector,
}

impl Injector for PickyInjector {
    fn insert(&mut self, rule: &str, index: usize) -> Result<()> {
        if rule.contains("invalid") {
            bail!("unsupported rule");
        }
        self.inner.insert(rule, index)
    }

    fn insert_keyframes(&mut self, rule: &str) -> Result<()> {
        self.inner.insert_keyframes(rule)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

#[test]
fn rejected_rules_keep_store_aligned() {
    init();
    let mut store = RuleStore::new(PickyInjector::default(), Hashing::default());
    let bad = Rule::new(Declarations::new().with("color", "invalid"));
    let good = Rule::new(Declarations::new().with("color", "red"));

    let bad_name = store.resolve("text-invalid", &bad);
    let again = store.resolve("text-invalid", &bad);
    assert_eq!(bad_name, again);
    assert!(store.is_empty());

    store.resolve("text-red", &good);
    assert_eq!(store.len(), 1);
    assert_eq!(store.injector().inner.rules().len(), 1);
}
