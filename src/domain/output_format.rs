//! Output format compilation

use super::format_tags::{self, FormatToken, Renderer};
use chrono::NaiveDate;

/// One step of a compiled output format
#[derive(Debug, Clone)]
pub enum RenderStep {
    /// Text copied verbatim
    Literal(String),
    /// A tag rendered from the date
    Tag {
        tag: &'static str,
        renderer: Renderer,
    },
}

impl RenderStep {
    fn render_into(&self, date: NaiveDate, output: &mut String) {
        match self {
            RenderStep::Literal(text) => output.push_str(text),
            RenderStep::Tag { renderer, .. } => output.push_str(&renderer.render(date)),
        }
    }
}

/// A compiled output format: literal runs and tag renderers in order
#[derive(Debug, Clone)]
pub struct CompiledOutputFormat {
    format: String,
    steps: Vec<RenderStep>,
}

impl CompiledOutputFormat {
    /// Compile an output format string. Never fails: anything that is not a
    /// tag is literal text.
    pub fn compile(format: &str) -> Self {
        let mut steps = Vec::new();
        let mut pending = String::new();

        for token in format_tags::tokenize(format) {
            match token {
                FormatToken::Literal(c) => pending.push(c),
                FormatToken::Tag(spec) => {
                    if !pending.is_empty() {
                        steps.push(RenderStep::Literal(std::mem::take(&mut pending)));
                    }
                    steps.push(RenderStep::Tag {
                        tag: spec.tag,
                        renderer: spec.renderer,
                    });
                }
            }
        }

        if !pending.is_empty() {
            steps.push(RenderStep::Literal(pending));
        }

        CompiledOutputFormat {
            format: format.to_string(),
            steps,
        }
    }

    /// The format string this was compiled from
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn steps(&self) -> &[RenderStep] {
        &self.steps
    }

    /// Render a date through every step in order
    pub fn render(&self, date: NaiveDate) -> String {
        let mut output = String::new();
        for step in &self.steps {
            step.render_into(date, &mut output);
        }
        output
    }
}
