//! Terminal session: the single owner of the process streams.

use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Write};

use tracing::{debug, trace};

use vtstyle_core::codec::{
    background_color_code, color_code, color_escape_verbose, extended_background_color_code,
    extended_color_code, format_code, reset_code,
};
use vtstyle_core::{
    control_byte, ColorSelector, Dimensions, Error, FormatAttribute, Palette256Index, Result,
    Style,
};

use crate::size::{NoTerminalSize, SizeQuery, TtySize};

/// Output stream selector for [`TerminalSession::write_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    /// Standard output
    #[default]
    Output,
    /// Standard error
    Error,
    /// Sink that drops everything written to it
    Discard,
}

/// Read one line from `reader`, decode it as UTF-8 and strip the trailing newline.
///
/// A final line without a newline is returned as-is.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if the stream is already at end-of-stream
/// - [`Error::Decoding`] if the line is not valid UTF-8
/// - [`Error::Io`] if the underlying read fails
pub fn read_line_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    let read = reader.read_until(b'\n', &mut buf)?;
    trace!("Read {} bytes from input", read);

    if read == 0 {
        return Err(Error::EmptyInput);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(String::from_utf8(buf)?)
}

/// Owns the input, output, error and discard streams plus the size query.
///
/// Every operation is independent; the session keeps no state besides the
/// handles themselves. Construct one with [`TerminalSession::stdio`] and pass
/// it to whoever needs terminal access.
pub struct TerminalSession {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
    error: Box<dyn Write + Send>,
    discard: Box<dyn Write + Send>,
    size: Box<dyn SizeQuery + Send>,
}

impl std::fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession").finish_non_exhaustive()
    }
}

impl TerminalSession {
    /// Session over the process's standard streams, sizing from stdout.
    pub fn stdio() -> Self {
        Self::builder().build()
    }

    /// Start building a session with injected streams.
    pub fn builder() -> TerminalSessionBuilder {
        TerminalSessionBuilder::default()
    }

    /// Block until one line is available on the input stream.
    ///
    /// See [`read_line_from`] for the error conditions.
    pub fn read_line(&mut self) -> Result<String> {
        read_line_from(&mut self.input)
    }

    /// Write `text` to the output stream.
    pub fn write(&mut self, text: &str, append_newline: bool) -> Result<()> {
        self.write_to(Stream::Output, text, append_newline)
    }

    /// Write `text` to the selected stream, followed by a newline if requested.
    pub fn write_to(&mut self, stream: Stream, text: &str, append_newline: bool) -> Result<()> {
        let writer = self.stream_mut(stream);
        writer.write_all(text.as_bytes())?;
        if append_newline {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write any displayable value to the selected stream.
    pub fn write_display<T: Display + ?Sized>(
        &mut self,
        value: &T,
        append_newline: bool,
        stream: Stream,
    ) -> Result<()> {
        self.write_to(stream, &value.to_string(), append_newline)
    }

    /// Write a single newline to the selected stream.
    pub fn newline(&mut self, stream: Stream) -> Result<()> {
        self.write_to(stream, "", true)
    }

    /// Emit the combined format and foreground sequence.
    pub fn emit_color(&mut self, selector: ColorSelector) -> Result<()> {
        self.write(&color_escape_verbose(selector), false)
    }

    /// Emit the short-form foreground code; nothing for formats without one.
    pub fn emit_color_only(&mut self, selector: ColorSelector) -> Result<()> {
        self.emit_optional(color_code(selector))
    }

    /// Emit the short-form background code; nothing for formats without one.
    pub fn emit_background(&mut self, selector: ColorSelector) -> Result<()> {
        self.emit_optional(background_color_code(selector))
    }

    /// Emit a standalone format attribute.
    pub fn emit_format(&mut self, format: FormatAttribute) -> Result<()> {
        self.write(&format_code(format), false)
    }

    /// Restore the default character set and clear all attributes.
    pub fn reset_formatting(&mut self) -> Result<()> {
        self.write(&reset_code(), false)
    }

    /// Emit a 256-color foreground.
    pub fn emit_palette256(&mut self, index: Palette256Index) -> Result<()> {
        self.write(&extended_color_code(index), false)
    }

    /// Emit a 256-color background.
    pub fn emit_palette256_background(&mut self, index: Palette256Index) -> Result<()> {
        self.write(&extended_background_color_code(index), false)
    }

    /// Emit every code of `style` without any text or reset.
    pub fn emit_style(&mut self, style: &Style) -> Result<()> {
        self.write(&style.codes(), false)
    }

    /// Write `text` wrapped in `style` and a trailing reset.
    pub fn write_styled(&mut self, text: &str, style: &Style, append_newline: bool) -> Result<()> {
        self.write(&style.paint(text), append_newline)
    }

    /// Write the raw C0 byte for a caret-notation letter.
    ///
    /// Returns `false` and writes nothing when the letter has no control byte.
    pub fn write_control(&mut self, letter: char) -> Result<bool> {
        let Some(byte) = control_byte(letter) else {
            debug!("No control byte for {:?}", letter);
            return Ok(false);
        };
        self.output.write_all(&[byte])?;
        self.output.flush()?;
        Ok(true)
    }

    /// Query the current terminal size. Never cached.
    ///
    /// # Errors
    ///
    /// [`Error::NoTerminal`] when output is not an interactive terminal. The
    /// caller decides what to display instead; no default size is assumed.
    pub fn query_size(&self) -> Result<Dimensions> {
        let result = self.size.query_size();
        match &result {
            Ok(dims) => debug!("Queried terminal size: {}", dims),
            Err(err) => debug!("Terminal size unavailable: {}", err),
        }
        result
    }

    /// Current number of columns; re-queried on every call.
    pub fn columns(&self) -> Result<u16> {
        self.query_size().map(|dims| dims.cols)
    }

    /// Current number of rows; re-queried on every call.
    pub fn rows(&self) -> Result<u16> {
        self.query_size().map(|dims| dims.rows)
    }

    /// Check whether a size query currently succeeds.
    pub fn is_terminal(&self) -> bool {
        self.size.query_size().is_ok()
    }

    /// Flush the output and error streams.
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        self.error.flush()?;
        Ok(())
    }

    fn emit_optional(&mut self, code: Option<String>) -> Result<()> {
        match code {
            Some(code) => self.write(&code, false),
            None => Ok(()),
        }
    }

    fn stream_mut(&mut self, stream: Stream) -> &mut (dyn Write + Send) {
        match stream {
            Stream::Output => &mut *self.output,
            Stream::Error => &mut *self.error,
            Stream::Discard => &mut *self.discard,
        }
    }
}

/// Builder for [`TerminalSession`]; unset parts fall back to the process streams.
#[derive(Default)]
pub struct TerminalSessionBuilder {
    input: Option<Box<dyn BufRead + Send>>,
    output: Option<Box<dyn Write + Send>>,
    error: Option<Box<dyn Write + Send>>,
    discard: Option<Box<dyn Write + Send>>,
    size: Option<Box<dyn SizeQuery + Send>>,
}

impl std::fmt::Debug for TerminalSessionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSessionBuilder")
            .field("input", &self.input.is_some())
            .field("output", &self.output.is_some())
            .field("error", &self.error.is_some())
            .field("discard", &self.discard.is_some())
            .field("size", &self.size.is_some())
            .finish()
    }
}

impl TerminalSessionBuilder {
    /// Use `reader` as the input stream.
    pub fn input<R: BufRead + Send + 'static>(mut self, reader: R) -> Self {
        self.input = Some(Box::new(reader));
        self
    }

    /// Use `writer` as the output stream.
    ///
    /// Unless a size query is also set, the session then reports
    /// [`Error::NoTerminal`] for every size query: the process's own stdout
    /// says nothing about `writer`.
    pub fn output<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.output = Some(Box::new(writer));
        self
    }

    /// Use `device` as the output stream and size queries from its descriptor.
    #[cfg(unix)]
    pub fn terminal_output<W>(mut self, device: W) -> Self
    where
        W: Write + Send + std::os::unix::io::AsRawFd + 'static,
    {
        self.size = Some(Box::new(TtySize::for_fd(device.as_raw_fd())));
        self.output = Some(Box::new(device));
        self
    }

    /// Use `writer` as the error stream.
    pub fn error<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.error = Some(Box::new(writer));
        self
    }

    /// Use `writer` as the discard stream.
    pub fn discard<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.discard = Some(Box::new(writer));
        self
    }

    /// Use `query` for terminal size queries.
    pub fn size_query<Q: SizeQuery + Send + 'static>(mut self, query: Q) -> Self {
        self.size = Some(Box::new(query));
        self
    }

    /// Build the session.
    pub fn build(self) -> TerminalSession {
        let size: Box<dyn SizeQuery + Send> = match (self.size, self.output.is_some()) {
            (Some(size), _) => size,
            (None, true) => Box::new(NoTerminalSize),
            (None, false) => Box::new(TtySize::stdout()),
        };
        TerminalSession {
            input: self
                .input
                .unwrap_or_else(|| Box::new(BufReader::new(io::stdin()))),
            output: self.output.unwrap_or_else(|| Box::new(io::stdout())),
            error: self.error.unwrap_or_else(|| Box::new(io::stderr())),
            discard: self.discard.unwrap_or_else(|| Box::new(io::sink())),
            size,
        }
    }
}
