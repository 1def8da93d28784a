pub(crate) struct Template;

impl Template {
    pub fn to_string<T: askama::Template>(template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }
}
