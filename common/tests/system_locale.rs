//! Host locale discovery from the process environment.

use caixa_common::{Language, infer_from_locale, system_locale};
use rstest::rstest;

#[rstest]
#[case(Some("cs_CZ.UTF-8"), Some("en_US.UTF-8"), Some("pt_BR.UTF-8"), Some("cs_CZ.UTF-8"))]
#[case(None, Some("is_IS.UTF-8"), Some("en_US.UTF-8"), Some("is_IS.UTF-8"))]
#[case(None, None, Some("pt_PT.UTF-8"), Some("pt_PT.UTF-8"))]
#[case(Some("  "), None, Some("en_GB"), Some("en_GB"))]
#[case(Some("C"), Some("POSIX"), Some("pt_BR"), Some("pt_BR"))]
#[case(Some("C.UTF-8"), None, None, None)]
#[case(None, None, None, None)]
fn reads_the_first_meaningful_locale_variable(
    #[case] lc_all: Option<&str>,
    #[case] lc_messages: Option<&str>,
    #[case] lang: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let discovered = temp_env::with_vars(
        [("LC_ALL", lc_all), ("LC_MESSAGES", lc_messages), ("LANG", lang)],
        system_locale,
    );

    assert_eq!(discovered.as_deref(), expected);
}

#[test]
fn discovered_locales_feed_language_inference() {
    let language = temp_env::with_vars(
        [("LC_ALL", None), ("LC_MESSAGES", None), ("LANG", Some("pt_BR.UTF-8@euro"))],
        || system_locale().as_deref().and_then(infer_from_locale),
    );

    assert_eq!(language, Some(Language::PtBr));
}
