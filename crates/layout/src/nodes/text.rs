//! Wrapped text.
//!
//! Text is tokenized once, when the cursor is created; wrapping and
//! pagination then work entirely off cached token widths. Words are
//! atomic: a word wider than the offered box blocks progress rather
//! than being split. Interior blank lines are kept; a newline at the
//! very end terminates the last line instead of opening a blank one.

use crate::LayoutError;
use crate::cursor::{Paginator, fits};
use crate::env::LayoutEnv;
use crate::fragment::{Fragment, PaintOp};
use galley_render::{ColorHandle, FontHandle, LineMetrics, TextMetrics};
use galley_types::{Color, FontSpec, Size};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub font: FontSpec,
    /// `None` draws in the target's default ink.
    pub color: Option<Color>,
    pub align: TextAlign,
}

#[derive(Debug, Clone)]
pub struct TextBlock {
    text: String,
    style: TextStyle,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.style.font = font;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.style.align = align;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

#[derive(Debug, Clone)]
enum Token {
    Word { text: String, width: f32 },
    Newline,
}

fn tokenize(metrics: &dyn TextMetrics, font: &FontHandle, text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        for word in line.split_whitespace() {
            tokens.push(Token::Word {
                width: metrics.text_width(font, word),
                text: word.to_string(),
            });
        }
        if lines.peek().is_some() {
            tokens.push(Token::Newline);
        }
    }
    tokens
}

#[derive(Debug, Clone)]
pub(crate) struct TextCursor {
    block: Arc<TextBlock>,
    font: FontHandle,
    color: Option<ColorHandle>,
    line: LineMetrics,
    space_width: f32,
    tokens: Arc<Vec<Token>>,
    pos: usize,
    started: bool,
}

impl TextCursor {
    pub(crate) fn new(env: &LayoutEnv, block: Arc<TextBlock>) -> Result<Self, LayoutError> {
        let pool = env.pool();
        let font = pool.font(&block.style().font)?;
        let color = pool.color_for(block.style().color.as_ref())?;

        let metrics = env.metrics();
        let line = metrics.line_metrics(&font);
        let space_width = metrics.text_width(&font, " ");
        let tokens = Arc::new(tokenize(metrics, &font, block.text()));

        Ok(Self {
            block,
            font,
            color,
            line,
            space_width,
            tokens,
            pos: 0,
            started: false,
        })
    }

    fn widest_remaining_word(&self) -> f32 {
        self.tokens[self.pos..]
            .iter()
            .filter_map(|t| match t {
                Token::Word { width, .. } => Some(*width),
                Token::Newline => None,
            })
            .fold(0.0, f32::max)
    }
}

impl Paginator for TextCursor {
    fn min_size(&self) -> Size {
        if !self.has_more() {
            return Size::zero();
        }
        Size::new(self.widest_remaining_word(), self.line.height())
    }

    fn preferred_size(&self) -> Size {
        if !self.has_more() {
            return Size::zero();
        }
        let remaining = &self.tokens[self.pos..];
        let mut widest: f32 = 0.0;
        let mut line_count = 1usize;
        let mut line_w = 0.0f32;
        for (i, token) in remaining.iter().enumerate() {
            match token {
                Token::Newline => {
                    widest = widest.max(line_w);
                    line_w = 0.0;
                    // A trailing newline is a terminator, not a blank
                    // line; the wrap loop renders it the same way.
                    if i + 1 < remaining.len() {
                        line_count += 1;
                    }
                }
                Token::Word { width, .. } => {
                    if line_w > 0.0 {
                        line_w += self.space_width;
                    }
                    line_w += width;
                }
            }
        }
        widest = widest.max(line_w);
        Size::new(widest, line_count as f32 * self.line.height())
    }

    fn has_more(&self) -> bool {
        !self.started || self.pos < self.tokens.len()
    }

    fn next(&mut self, width: f32, height: f32) -> Result<Option<Fragment>, LayoutError> {
        if !self.has_more() {
            return Ok(None);
        }
        let line_h = self.line.height();
        if !fits(line_h, height) {
            return Ok(None);
        }
        if !fits(self.widest_remaining_word(), width) {
            return Ok(None);
        }

        let mut lines: Vec<(String, f32)> = Vec::new();
        let mut pos = self.pos;
        while fits((lines.len() + 1) as f32 * line_h, height) {
            if pos >= self.tokens.len() {
                // Empty content still draws as one blank line.
                if lines.is_empty() && !self.started {
                    lines.push((String::new(), 0.0));
                }
                break;
            }
            let mut text = String::new();
            let mut line_w = 0.0f32;
            while pos < self.tokens.len() {
                match &self.tokens[pos] {
                    Token::Newline => {
                        pos += 1;
                        break;
                    }
                    Token::Word { text: word, width: word_w } => {
                        let needed = if text.is_empty() {
                            *word_w
                        } else {
                            line_w + self.space_width + *word_w
                        };
                        if !fits(needed, width) {
                            break;
                        }
                        if !text.is_empty() {
                            text.push(' ');
                        }
                        text.push_str(word);
                        line_w = needed;
                        pos += 1;
                    }
                }
            }
            lines.push((text, line_w));
        }

        self.pos = pos;
        self.started = true;

        let frag_w = lines.iter().map(|l| l.1).fold(0.0f32, f32::max);
        let frag_h = lines.len() as f32 * line_h;
        let mut fragment = Fragment::new(Size::new(frag_w, frag_h));
        for (i, (text, line_w)) in lines.into_iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let x = match self.block.style().align {
                TextAlign::Left => 0.0,
                TextAlign::Center => (frag_w - line_w) / 2.0,
                TextAlign::Right => frag_w - line_w,
            };
            fragment.push(PaintOp::Text {
                x,
                y: i as f32 * line_h,
                text,
                font: self.font.clone(),
                color: self.color.clone(),
            });
        }
        log::trace!(
            "text fragment: {} line(s), {:.1}x{:.1}",
            fragment.ops().len(),
            frag_w,
            frag_h
        );
        Ok(Some(fragment))
    }

    fn fork(&self) -> Box<dyn Paginator> {
        Box::new(self.clone())
    }
}
