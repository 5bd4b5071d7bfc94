use crate::parser::ConstantGroup;

/// Renders a constant group as an `as const` object plus a type alias of its shape
pub struct ConstGenerator;

impl ConstGenerator {
    pub fn generate(group: &ConstantGroup) -> String {
        let mut lines = vec![format!("export const {} = {{", group.name)];
        for (key, literal) in &group.entries {
            lines.push(format!("  {}: {},", key, literal));
        }
        lines.push("} as const;".to_string());
        lines.push(String::new());
        lines.push(format!(
            "export type {}Type = typeof {};",
            group.name, group.name
        ));

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}
