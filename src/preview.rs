//! Continuous-display viewer state.
//!
//! A [`Preview`] holds whatever document was last produced for it and
//! keeps a display fragment laid out at the viewer's width. The
//! display box is unbounded vertically; content that claims the whole
//! unbounded box (column flows do) would make a page of infinite
//! height, so a fit-to-page preview reruns pagination through the fit
//! search and displays the fitted single page instead.

use galley_layout::{Content, Fragment, LayoutEnv, LayoutError, UNBOUNDED, fit_page_height};

#[derive(Debug)]
pub struct Preview {
    env: LayoutEnv,
    content: Option<Content>,
    viewport_width: f32,
    fit_to_page: bool,
    fragment: Option<Fragment>,
    fitted_height: Option<f32>,
}

impl Preview {
    pub fn new(env: LayoutEnv) -> Self {
        Self {
            env,
            content: None,
            viewport_width: 0.0,
            fit_to_page: false,
            fragment: None,
            fitted_height: None,
        }
    }

    /// Enables the fit-to-page variant: unbounded layouts are replaced
    /// by a single page of fitted height.
    pub fn with_fit_to_page(mut self, on: bool) -> Self {
        self.fit_to_page = on;
        self
    }

    /// Called by producers whenever a new document is ready for this
    /// viewer. Replaces the previous document and lays the new one
    /// out; on error the previously displayed fragment stays intact.
    pub fn set_content(&mut self, content: Content) -> Result<(), LayoutError> {
        let previous = self.content.replace(content);
        if let Err(err) = self.relayout() {
            self.content = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.content = None;
        self.fragment = None;
        self.fitted_height = None;
    }

    /// Viewer width changed; content reflows. Widths below the
    /// content's minimum are clamped up to it, so narrowing a window
    /// scrolls horizontally instead of losing words.
    pub fn resize(&mut self, viewport_width: f32) -> Result<(), LayoutError> {
        let previous = self.viewport_width;
        self.viewport_width = viewport_width;
        if let Err(err) = self.relayout() {
            self.viewport_width = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// The fragment currently on display, if any document is set.
    pub fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }

    /// Height of the displayed page: the fitted height when the fit
    /// search ran, otherwise the laid-out fragment's own height.
    pub fn page_height(&self) -> Option<f32> {
        self.fitted_height
            .or_else(|| self.fragment.as_ref().map(Fragment::height))
    }

    pub fn min_width(&self) -> Result<f32, LayoutError> {
        match &self.content {
            None => Ok(0.0),
            Some(content) => Ok(content.min_size(&self.env)?.width),
        }
    }

    fn relayout(&mut self) -> Result<(), LayoutError> {
        let Some(content) = &self.content else {
            self.fragment = None;
            self.fitted_height = None;
            return Ok(());
        };

        let mut cursor = content.paginate(&self.env)?;
        let width = self.viewport_width.max(cursor.min_size().width);
        let Some(piece) = cursor.next(width, UNBOUNDED)? else {
            return Err(LayoutError::TooWide {
                min: cursor.min_size().width,
                available: width,
            });
        };

        if piece.is_unbounded() && self.fit_to_page {
            let fit = fit_page_height(content, &self.env, width)?;
            log::debug!(
                "preview: unbounded layout fitted to {:.1}pt at width {:.1}pt",
                fit.height,
                width
            );
            self.fragment = Some(fit.fragment);
            self.fitted_height = Some(fit.height);
        } else {
            self.fragment = Some(piece);
            self.fitted_height = None;
        }
        Ok(())
    }
}
