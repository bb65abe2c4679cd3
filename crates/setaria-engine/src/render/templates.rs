use std::path::Path;

use minijinja::{AutoEscape, Environment, ErrorKind, Output, State, Value, context};

use super::{Element, ElementRenderer, RenderError};

/// File extension of template overrides on disk (`<Name>.html`).
pub const TEMPLATE_EXTENSION: &str = "html";

/// Built-in template source for an element name.
fn builtin_source(name: &str) -> Option<&'static str> {
    let source = match name {
        "Note" => "{% for item in items %}{{ item }}{% endfor %}",
        "Header" => "<h{{ level }}>{% for item in items %}{{ item }}{% endfor %}</h{{ level }}>",
        "P" => "{% for item in items %}<p>{{ item }}</p>{% endfor %}",
        "BlockQuote" => {
            "<blockquote>{% for item in items %}<p>{{ item }}</p>{% endfor %}</blockquote>"
        }
        "Ol" => "<ol>{% for item in items %}<li>{{ item }}</li>{% endfor %}</ol>",
        "Ul" => "<ul>{% for item in items %}<li>{{ item }}</li>{% endfor %}</ul>",
        "PreCode" => {
            r#"<pre><code{% if lang %} class="language-{{ lang }}"{% endif %}>{{ code }}</code></pre>"#
        }
        "Code" => "<code>{{ code }}</code>",
        "Strong" => "<strong>{{ text }}</strong>",
        "Link" => r#"<a href="{{ url }}">{{ text }}</a>"#,
        "Img" => r#"<img src="{{ src }}" alt="{{ alt }}">"#,
        _ => return None,
    };
    Some(source)
}

/// The stock [`ElementRenderer`]: one minijinja template per element.
///
/// Built-in templates cover every element; overrides registered with
/// [`Templates::with_template`] or loaded by [`Templates::from_dir`] take
/// precedence. HTML auto-escaping is enabled for all templates and child
/// fragments are passed as safe strings, so only captured source text gets
/// escaped.
#[derive(Debug, Clone)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Template set made of the built-in templates only.
    pub fn builtin() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_formatter(escape_formatter);
        env.set_loader(|name| Ok(builtin_source(name).map(str::to_owned)));
        Self { env }
    }

    /// Built-in templates overridden by any `<Name>.html` found in `dir`.
    ///
    /// Files for unknown element names are ignored.
    pub fn from_dir(dir: &Path) -> Result<Self, RenderError> {
        let mut templates = Self::builtin();
        for name in Element::NAMES {
            let path = dir.join(format!("{name}.{TEMPLATE_EXTENSION}"));
            if !path.is_file() {
                continue;
            }
            let source = std::fs::read_to_string(&path)
                .map_err(|source| RenderError::Load { path, source })?;
            log::debug!("Loaded template override for {name}");
            templates = templates.with_template(name, source)?;
        }
        Ok(templates)
    }

    /// Replaces the template of one element.
    ///
    /// `name` must be one of [`Element::NAMES`].
    pub fn with_template(
        mut self,
        name: &'static str,
        source: impl Into<String>,
    ) -> Result<Self, RenderError> {
        if !Element::NAMES.contains(&name) {
            return Err(RenderError::UnknownElement { name });
        }
        self.env
            .add_template_owned(name, source.into())
            .map_err(|source| RenderError::Template {
                element: name,
                source,
            })?;
        Ok(self)
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ElementRenderer for Templates {
    fn render(&self, element: &Element<'_>) -> Result<String, RenderError> {
        let name = element.name();
        let template = self.env.get_template(name).map_err(|source| {
            if source.kind() == ErrorKind::TemplateNotFound {
                RenderError::MissingTemplate { element: name }
            } else {
                RenderError::Template {
                    element: name,
                    source,
                }
            }
        })?;
        template
            .render(template_context(element))
            .map_err(|source| RenderError::Template {
                element: name,
                source,
            })
    }
}

/// HTML-escapes unsafe strings with `html-escape`, which leaves `/` alone
/// so URLs stay readable.
fn escape_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    match value.as_str() {
        Some(text) if !value.is_safe() && matches!(state.auto_escape(), AutoEscape::Html) => {
            out.write_str(&html_escape::encode_double_quoted_attribute(text))?;
            Ok(())
        }
        _ => minijinja::escape_formatter(out, state, value),
    }
}

fn fragments(items: &[String]) -> Value {
    Value::from(
        items
            .iter()
            .map(|item| Value::from_safe_string(item.clone()))
            .collect::<Vec<_>>(),
    )
}

fn template_context(element: &Element<'_>) -> Value {
    match *element {
        Element::Note { items }
        | Element::Paragraph { items }
        | Element::BlockQuote { items }
        | Element::OrderedList { items }
        | Element::UnorderedList { items } => context! { items => fragments(items) },
        Element::Header { level, items } => context! { level, items => fragments(items) },
        Element::PreCode { lang, code } => context! { lang, code },
        Element::Code { code } => context! { code },
        Element::Strong { text } => context! { text },
        Element::Link { text, url } => context! { text, url },
        Element::Image { alt, src } => context! { alt, src },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn items(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_element_has_a_builtin() {
        for name in Element::NAMES {
            assert!(builtin_source(name).is_some(), "missing builtin for {name}");
        }
        assert!(builtin_source("Table").is_none());
    }

    #[test]
    fn block_fragments_are_not_escaped() {
        let templates = Templates::builtin();
        let children = items(&["<strong>a</strong>", "b"]);
        let html = templates
            .render(&Element::UnorderedList { items: &children })
            .unwrap();
        assert_eq!(html, "<ul><li><strong>a</strong></li><li>b</li></ul>");
    }

    #[test]
    fn header_uses_level() {
        let templates = Templates::builtin();
        let children = items(&["Hello"]);
        let html = templates
            .render(&Element::Header {
                level: 2,
                items: &children,
            })
            .unwrap();
        assert_eq!(html, "<h2>Hello</h2>");
    }

    #[test]
    fn captured_text_is_escaped() {
        let templates = Templates::builtin();
        let html = templates.render(&Element::Code { code: "a<b" }).unwrap();
        assert_eq!(html, "<code>a&lt;b</code>");
    }

    #[test]
    fn precode_with_and_without_language() {
        let templates = Templates::builtin();
        let html = templates
            .render(&Element::PreCode {
                lang: "go",
                code: "x:=1",
            })
            .unwrap();
        assert_eq!(html, r#"<pre><code class="language-go">x:=1</code></pre>"#);

        let html = templates
            .render(&Element::PreCode {
                lang: "",
                code: "x",
            })
            .unwrap();
        assert_eq!(html, "<pre><code>x</code></pre>");
    }

    #[test]
    fn urls_keep_their_slashes() {
        let templates = Templates::builtin();
        let html = templates
            .render(&Element::Link {
                text: "a \"b\"",
                url: "https://example.org/x?a=1&b=2",
            })
            .unwrap();
        assert_eq!(
            html,
            r#"<a href="https://example.org/x?a=1&amp;b=2">a &quot;b&quot;</a>"#
        );
    }

    #[test]
    fn override_replaces_builtin() {
        let templates = Templates::builtin()
            .with_template("Strong", "<b>{{ text }}</b>")
            .unwrap();
        let html = templates.render(&Element::Strong { text: "hi" }).unwrap();
        assert_eq!(html, "<b>hi</b>");
    }

    #[test]
    fn override_with_unknown_name_is_rejected() {
        let result = Templates::builtin().with_template("Table", "<table>");
        assert!(matches!(
            result,
            Err(RenderError::UnknownElement { name: "Table" })
        ));
    }

    #[test]
    fn broken_override_is_a_template_error() {
        let result = Templates::builtin().with_template("Strong", "{% for %}");
        assert!(matches!(
            result,
            Err(RenderError::Template {
                element: "Strong",
                ..
            })
        ));
    }

    #[test]
    fn from_dir_loads_overrides() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Code.html"), "<tt>{{ code }}</tt>").unwrap();
        std::fs::write(dir.path().join("Unrelated.html"), "ignored").unwrap();

        let templates = Templates::from_dir(dir.path()).unwrap();
        let html = templates.render(&Element::Code { code: "x" }).unwrap();
        assert_eq!(html, "<tt>x</tt>");

        // Elements without an override keep the built-in template
        let html = templates.render(&Element::Strong { text: "y" }).unwrap();
        assert_eq!(html, "<strong>y</strong>");
    }
}
