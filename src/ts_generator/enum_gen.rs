/// Renders a string enum whose members map to their own names
pub struct EnumGenerator;

impl EnumGenerator {
    /// ```text
    /// export enum GeoFenceLocationKind {
    ///   OFFICE = 'OFFICE',
    /// }
    /// ```
    pub fn generate(name: &str, values: &[String]) -> String {
        let mut lines = vec![format!("export enum {} {{", name)];
        for value in values {
            lines.push(format!("  {} = '{}',", value, value));
        }
        lines.push("}".to_string());

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}
