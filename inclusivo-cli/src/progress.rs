use std::io::{self, Read, Seek, SeekFrom};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

/// Reader that shows how much of a corpus file was read.
///
/// The bar length is the file size in bytes. It is finished when the
/// reader is dropped.
pub struct ReadProgress<R> {
    inner: R,
    progress_bar: ProgressBar,
}

impl<R> ReadProgress<R>
where
    R: Seek,
{
    pub fn new(mut read: R) -> io::Result<Self> {
        let len = read.seek(SeekFrom::End(0))? + 1;
        read.seek(SeekFrom::Start(0))?;
        let progress_bar = ProgressBar::new(len);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar} {bytes}/{total_bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        Ok(ReadProgress {
            inner: read,
            progress_bar,
        })
    }
}

impl<R> Read for ReadProgress<R>
where
    R: Read + Seek,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n_read = self.inner.read(buf)?;
        let pos = self.inner.stream_position()?;
        self.progress_bar.set_position(pos);
        Ok(n_read)
    }
}

impl<R> Drop for ReadProgress<R> {
    fn drop(&mut self) {
        self.progress_bar.finish();
    }
}

/// Measure the number of sentences processed per second.
///
/// The suggestion speed and the number of rewritten sentences are
/// logged when the instance is dropped.
pub struct SuggesterSpeed {
    start: Instant,
    n_sentences: usize,
    n_rewritten: usize,
}

impl SuggesterSpeed {
    pub fn new() -> Self {
        SuggesterSpeed {
            start: Instant::now(),
            n_sentences: 0,
            n_rewritten: 0,
        }
    }

    /// Count a processed sentence.
    pub fn count_sentence(&mut self, rewritten: bool) {
        self.n_sentences += 1;
        if rewritten {
            self.n_rewritten += 1;
        }
    }
}

impl Default for SuggesterSpeed {
    fn default() -> Self {
        SuggesterSpeed::new()
    }
}

impl Drop for SuggesterSpeed {
    fn drop(&mut self) {
        let elapsed_secs = self.start.elapsed().as_secs_f32();
        log::info!(
            "Processed {} sentences ({} rewritten) in {:.1}s ({:.1} sents/s)",
            self.n_sentences,
            self.n_rewritten,
            elapsed_secs,
            self.n_sentences as f32 / elapsed_secs
        );
    }
}
