/// Build the filter string for the save dialog.
///
/// FLTK's native chooser takes "Description\tPattern" lines. The pattern is
/// only a hint shown to the user; the chosen path is used exactly as typed.
pub fn get_save_filter(description: &str, pattern: &str) -> String {
    if description.is_empty() {
        pattern.to_string()
    } else {
        format!("{}\t{}", description, pattern)
    }
}
