//! Поверхность отображения, которую предоставляет хост.

use std::io::{self, Write};

/// Элемент, в который можно записать разметку.
pub trait DisplaySurface {
    /// Заменяет содержимое поверхности на `html`.
    fn set_inner_html(
        &mut self,
        html: &str,
    );
}

/// Поверхность поверх `io::Write`: каждое обновление печатается строкой.
///
/// В поток попадает только разметка; логи идут в stderr.
#[derive(Debug, Default)]
pub struct WriterSurface<W> {
    out: W,
}

/// Поверхность, которую использует бинарник.
pub type StdoutSurface = WriterSurface<io::Stdout>;

/// Поверхность в памяти: хранит последнее записанное содержимое.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferSurface {
    inner_html: String,
    updates: usize,
}

impl<W: Write> WriterSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StdoutSurface {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DisplaySurface for WriterSurface<W> {
    fn set_inner_html(
        &mut self,
        html: &str,
    ) {
        if let Err(err) = writeln!(self.out, "{html}").and_then(|()| self.out.flush()) {
            tracing::warn!(%err, "failed to write to display surface");
        }
    }
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Сколько раз содержимое обновлялось.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl DisplaySurface for BufferSurface {
    fn set_inner_html(
        &mut self,
        html: &str,
    ) {
        self.inner_html = html.to_string();
        self.updates += 1;
    }
}

/// Разметка заголовка.
pub fn heading_html(heading: &str) -> String {
    format!("<h1>{heading}</h1>")
}

/// Записывает заголовок на поверхность.
pub fn render_heading<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    heading: &str,
) {
    surface.set_inner_html(&heading_html(heading));
}
