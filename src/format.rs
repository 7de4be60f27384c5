/// Renders an ordered sequence of location names as a display string,
/// joining the names with `" - "`. An empty path renders to the empty
/// string. This is the only place names become a human-facing form.
pub fn render_path<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(" - ")
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn empty_path_renders_to_empty_string() {
        assert_eq!(render_path([]), "");
    }

    #[test]
    fn single_location_renders_without_separator() {
        assert_eq!(render_path(["A"]), "A");
    }

    #[test]
    fn locations_are_joined_in_order() {
        assert_eq!(render_path(["A", "B"]), "A - B");
        assert_eq!(render_path(["A", "B", "C", "D"]), "A - B - C - D");
    }
}
