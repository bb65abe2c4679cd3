use crate::parsing::front_matter::FrontMatterLine;
use crate::render::RenderError;

use super::{
    builder::BlockTreeBuilder,
    classify::is_blank,
    kinds::Bullet,
    types::BlockKind,
};

impl BlockTreeBuilder<'_> {
    /// Consumes a run of list lines starting at the cursor.
    ///
    /// Bullets open, continue or close nested lists by indentation. A line
    /// without a marker continues the current item unless a blank line
    /// precedes it, in which case the list ends and the line is left for the
    /// main loop.
    pub(super) fn parse_list(&mut self) -> Result<(), RenderError> {
        let base = self.level();
        let renderer = self.renderer;

        while self.lines.has_current() {
            let n = self.lines.cursor();
            let line = self.lines.current().to_string();

            if let Some(meta) = FrontMatterLine::parse(&line) {
                self.front_matter.apply(meta);
            } else if let Some(bullet) = Bullet::parse(&line, self.classifier.indent_width) {
                self.place_bullet(base, &bullet)?;
                let list = self.top_mut();
                list.flush(renderer)?;
                list.push_text(bullet.text);
            } else if is_blank(&line) {
                self.lines.mark_blank(n);
                self.top_mut().flush(renderer)?;
            } else if self.lines.backward_blanks(n - 1) == 0 {
                // n >= 1: line 0 is the title and never starts a list
                self.top_mut().push_text(line.trim());
            } else {
                break;
            }
            self.lines.advance();
        }

        self.close_to(base)?;
        let last = self.lines.cursor().saturating_sub(1);
        self.lines.jumpto(last);
        Ok(())
    }

    /// Makes the list a bullet belongs to the top of the stack.
    fn place_bullet(&mut self, base: usize, bullet: &Bullet) -> Result<(), RenderError> {
        // shallower bullet: fold nested lists indented past it, unless the
        // bullet still sits deeper than the enclosing list
        while self.level() > base + 1
            && self
                .top()
                .list_indent()
                .is_some_and(|indent| indent > bullet.indent)
        {
            if self
                .parent()
                .list_indent()
                .is_some_and(|indent| indent < bullet.indent)
            {
                self.top_mut().set_list_indent(bullet.indent);
                break;
            }
            self.fold_top()?;
        }

        if self.level() == base {
            self.open_node(BlockKind::List {
                kind: bullet.kind,
                indent: bullet.indent,
            });
            return Ok(());
        }

        let deeper = self
            .top()
            .list_indent()
            .is_none_or(|indent| bullet.indent > indent);
        if !deeper {
            return Ok(());
        }
        if self.level() >= self.max_depth {
            log::debug!(
                "List nesting capped at depth {}; keeping bullet at the current level",
                self.max_depth
            );
            return Ok(());
        }
        self.open_node(BlockKind::List {
            kind: bullet.kind,
            indent: bullet.indent,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parsing::{ParseOptions, blocks::BlockTreeBuilder, lines::LineBuffer};
    use crate::render::Templates;
    use pretty_assertions::assert_eq;

    fn body_with(text: &str, options: &ParseOptions) -> String {
        let templates = Templates::builtin();
        BlockTreeBuilder::new(LineBuffer::from_text(text), options, &templates)
            .build()
            .unwrap()
            .body
    }

    fn body(text: &str) -> String {
        body_with(text, &ParseOptions::default())
    }

    #[test]
    fn flat_list() {
        assert_eq!(body("T\n* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn ordered_list() {
        assert_eq!(body("T\n1. a\n2. b"), "<ol><li>a</li><li>b</li></ol>");
    }

    #[test]
    fn nested_list_lands_inside_previous_item() {
        assert_eq!(
            body("T\n* a\n    * b\n* c"),
            "<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>"
        );
    }

    #[test]
    fn nested_kind_follows_its_bullet() {
        assert_eq!(
            body("T\n* a\n    1. b\n    2. c"),
            "<ul><li>a<ol><li>b</li><li>c</li></ol></li></ul>"
        );
    }

    #[test]
    fn jump_back_several_levels() {
        assert_eq!(
            body("T\n* a\n    * b\n        * c\n* d"),
            "<ul><li>a<ul><li>b<ul><li>c</li></ul></li></ul></li><li>d</li></ul>"
        );
    }

    #[test]
    fn shallower_sibling_stays_in_parent_item() {
        assert_eq!(
            body("T\n* a\n        * b\n    * c"),
            "<ul><li>a<ul><li>b</li><li>c</li></ul></li></ul>"
        );
    }

    #[test]
    fn shallower_sibling_then_back_to_top() {
        assert_eq!(
            body("T\n* a\n    * b\n            * c\n        * d\n* e"),
            "<ul><li>a<ul><li>b<ul><li>c</li><li>d</li></ul></li></ul></li><li>e</li></ul>"
        );
    }

    #[test]
    fn partial_indent_rounds_up() {
        assert_eq!(
            body("T\n* a\n  * b"),
            "<ul><li>a<ul><li>b</li></ul></li></ul>"
        );
    }

    #[test]
    fn continuation_joins_item() {
        assert_eq!(
            body("T\n* a\n  more\n* b"),
            "<ul><li>a\nmore</li><li>b</li></ul>"
        );
    }

    #[test]
    fn blank_then_text_ends_list() {
        assert_eq!(
            body("T\n* a\n\nNext paragraph"),
            "<ul><li>a</li></ul><p>Next paragraph</p>"
        );
    }

    #[test]
    fn blank_between_bullets_keeps_list() {
        assert_eq!(body("T\n* a\n\n* b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn list_closes_paragraph() {
        assert_eq!(
            body("T\nintro\n* a"),
            "<p>intro</p><ul><li>a</li></ul>"
        );
    }

    #[test]
    fn list_ends_at_header_after_blank() {
        assert_eq!(
            body("T\n* a\n\n# H"),
            "<ul><li>a</li></ul><h1>H</h1>"
        );
    }

    #[test]
    fn items_get_inline_markup() {
        assert_eq!(
            body("T\n* **x** `y`"),
            "<ul><li><strong>x</strong> <code>y</code></li></ul>"
        );
    }

    #[test]
    fn front_matter_inside_list() {
        let templates = Templates::builtin();
        let tree = BlockTreeBuilder::new(
            LineBuffer::from_text("T\n* a\nTags: x y\n* b"),
            &ParseOptions::default(),
            &templates,
        )
        .build()
        .unwrap();
        assert_eq!(tree.front_matter.tags, vec!["x", "y"]);
        assert_eq!(tree.body, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn depth_cap_flattens_deeper_bullets() {
        let options = ParseOptions {
            max_depth: 2,
            ..ParseOptions::default()
        };
        assert_eq!(
            body_with("T\n* a\n    * b\n        * c", &options),
            "<ul><li>a<ul><li>b</li><li>c</li></ul></li></ul>"
        );
    }

    #[test]
    fn deep_nesting_within_cap() {
        let mut text = String::from("T");
        for depth in 0..10 {
            text.push('\n');
            text.push_str(&" ".repeat(depth * 4));
            text.push_str("* x");
        }
        let html = body(&text);
        assert_eq!(html.matches("<ul>").count(), 10);
        assert_eq!(html.matches("</ul>").count(), 10);
    }
}
