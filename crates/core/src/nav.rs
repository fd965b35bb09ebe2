/// Extract the fragment identifier from an anchor href.
///
/// Returns `Some` for in-page links (`"#proyectos"` → `"proyectos"`); the
/// bare `"#"` yields an empty identifier, which matches no element id.
/// External and full-page hrefs return `None` and keep their default
/// navigation.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}
