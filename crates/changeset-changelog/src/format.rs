use changeset_core::BumpType;

/// Heading for a releasing severity. `BumpType::None` has no section.
#[must_use]
pub fn section_heading(bump_type: BumpType) -> Option<&'static str> {
    match bump_type {
        BumpType::Major => Some("Major Changes"),
        BumpType::Minor => Some("Minor Changes"),
        BumpType::Patch => Some("Patch Changes"),
        BumpType::None => None,
    }
}

/// Renders one severity section, or `None` when every line is empty.
#[must_use]
pub fn format_section(bump_type: BumpType, lines: &[String]) -> Option<String> {
    let heading = section_heading(bump_type)?;
    let lines: Vec<&str> = lines
        .iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(format!("### {heading}\n\n{}\n", lines.join("\n")))
}

/// Joins non-empty sections in the order given.
#[must_use]
pub fn format_body(sections: &[(BumpType, Vec<String>)]) -> String {
    sections
        .iter()
        .filter_map(|(bump_type, lines)| format_section(*bump_type, lines))
        .collect::<Vec<_>>()
        .join("\n")
}
