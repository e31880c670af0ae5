//! Template-method trait implemented by each container format's factory.

use crate::error::{TextureLoaderError, TextureLoaderResult};
use crate::reader::DataReader;
use crate::traits::TextureLoader;
use alloc::boxed::Box;

/// Recognizes a container format from a byte buffer and constructs its loader.
///
/// Implementations are stateless values (typically unit structs) shared
/// freely across threads. The trait splits responsibility the same way for
/// every format:
///
/// - the provided [`can_create`](Self::can_create) performs the
///   format-independent argument checks (absent input, buffer shorter than
///   the fixed header) and then hands a reader *truncated to the header
///   prefix* to the format-specific hook, so recognition cannot read past
///   [`header_length`](Self::header_length) bytes;
/// - the provided [`try_create`](Self::try_create) chains recognition and
///   construction, yielding a boxed loader borrowing the input buffer.
///
/// Recognition is a pure predicate over the header bytes. Construction
/// validates the declared layout against the full buffer length and never
/// returns a partial loader: the first failed check aborts with its specific
/// error.
pub trait TextureLoaderFactory: Send + Sync {
    /// Fixed number of bytes this format needs before any interpretation is
    /// attempted.
    fn header_length(&self) -> usize;

    /// Checks whether `data` starts with a well-formed header of this format.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the header passes every recognition check, otherwise:
    /// - [`EmptyInput`](TextureLoaderError::EmptyInput) for an empty buffer,
    /// - [`NotEnoughData`](TextureLoaderError::NotEnoughData) when the buffer
    ///   is shorter than [`header_length`](Self::header_length),
    /// - the format's own recognition failure.
    fn can_create(&self, data: &[u8]) -> TextureLoaderResult<()> {
        if data.is_empty() {
            return Err(TextureLoaderError::EmptyInput);
        }
        let reader = DataReader::new(data);
        let header = reader
            .prefix(self.header_length())
            .ok_or(TextureLoaderError::NotEnoughData {
                required: self.header_length(),
                actual: data.len(),
            })?;
        self.can_create_from_header(header)
    }

    /// Format-specific recognition over exactly the fixed header bytes.
    ///
    /// `header` is limited to the first [`header_length`](Self::header_length)
    /// bytes of the input; reads beyond that yield `None` from the reader.
    /// Implementations check identifying bytes and the header fields that
    /// recognition covers, stopping at the first failure.
    fn can_create_from_header(&self, header: DataReader<'_>) -> TextureLoaderResult<()>;

    /// Recognizes `data` and, on success, constructs a loader for it.
    ///
    /// The returned loader borrows `data`; the buffer must outlive it.
    fn try_create<'a>(&self, data: &'a [u8]) -> TextureLoaderResult<Box<dyn TextureLoader + 'a>> {
        self.can_create(data)?;
        self.create_loader(DataReader::new(data))
    }

    /// Builds the loader once recognition has accepted the header.
    ///
    /// `reader` covers the full buffer. Implementations validate layout
    /// consistency (declared sizes against actual length, per-level length
    /// prefixes) and collect the mip level spans. Called by
    /// [`try_create`](Self::try_create) after [`can_create`](Self::can_create)
    /// has passed; calling it directly with an unrecognized buffer reports
    /// the same layout failures but skips the recognition checks.
    fn create_loader<'a>(
        &self,
        reader: DataReader<'a>,
    ) -> TextureLoaderResult<Box<dyn TextureLoader + 'a>>;
}
