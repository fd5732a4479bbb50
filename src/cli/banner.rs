use todo_config::Settings;
use todo_domain::CategoryKey;

const LOGO: [&str; 5] = [
    r" _____  ___  ____   ___      __",
    r"|_   _|/ _ \|  _ \ / _ \    |  |",
    r"  | | | | | | | | | | | |   |  |",
    r"  | | | |_| | |_| | |_| |   |__|",
    r"  |_|  \___/|____/ \___/    |__|",
];
const MIN_INNER_WIDTH: usize = 28;

/// Boxed main menu listing the four categories and the top-level commands.
pub fn render_banner(settings: &Settings) -> Vec<String> {
    let mut rows: Vec<String> = LOGO.iter().map(|row| row.to_string()).collect();
    rows.push(String::new());
    rows.extend(
        CategoryKey::ALL
            .iter()
            .map(|key| format!("[{}] {}", key, settings.name(*key))),
    );
    rows.push(String::new());
    rows.push("[E] Rename classes".to_string());
    rows.push("[X] Exit".to_string());

    let inner = rows
        .iter()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_INNER_WIDTH);
    let border = format!("+{}+", "-".repeat(inner + 2));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(border.clone());
    for row in rows {
        let padding = inner - row.chars().count();
        lines.push(format!("| {}{} |", row, " ".repeat(padding)));
    }
    lines.push(border);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lists_current_names() {
        let mut settings = Settings::default();
        settings.set_name(CategoryKey::C, "Chores");
        let lines = render_banner(&settings);

        assert!(lines.iter().any(|line| line.contains("[A] Class 1")));
        assert!(lines.iter().any(|line| line.contains("[C] Chores")));
        assert!(lines.iter().any(|line| line.contains("[X] Exit")));
        assert!(lines.first().unwrap().starts_with('+'));
        assert!(lines[1].contains("_____  ___  ____   ___"));
        assert!(lines[5].contains(r"|_|  \___/|____/ \___/"));
    }

    #[test]
    fn rows_share_one_width() {
        let mut settings = Settings::default();
        settings.set_name(CategoryKey::A, "A much longer class name than the box minimum");
        let lines = render_banner(&settings);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }
}
