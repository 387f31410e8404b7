//! Plain-text rendering of the user table.

use crate::config::ReportConfig;
use crate::user::User;

/// First line of every report.
pub const REPORT_HEADER: &str = "--- Relatório de Usuários ---";

/// Body of a report over an empty table.
pub const REPORT_EMPTY: &str = "Nenhum usuário cadastrado.";

/// Render the report: the header, then one block per user in creation
/// order, or the empty-table notice.
///
/// `ID:`, `Nome:` and `Status:` are always present per user; the email
/// and age lines can be switched off in the `[report]` config section.
pub fn render(users: &[User], opts: &ReportConfig) -> String {
    let mut lines = vec![REPORT_HEADER.to_string()];

    if users.is_empty() {
        lines.push(REPORT_EMPTY.to_string());
        return lines.join("\n");
    }

    for user in users {
        lines.push(String::new());
        lines.push(format!("ID: {}", user.id));
        lines.push(format!("Nome: {}", user.name));
        if opts.show_email {
            lines.push(format!("Email: {}", user.email));
        }
        if opts.show_age {
            lines.push(format!("Idade: {}", user.age));
        }
        lines.push(format!("Status: {}", user.status));
    }

    lines.join("\n")
}
