use crate::codegen::CodeGenerator;
use crate::error::{GenerateError, GenerateResult};
use crate::fragment::{DestinationId, GeneratedFragment, MarkerDefinitionFragment};
use crate::options::GenerateOptions;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stem of the index file written by [`DirSink::finish`]
pub const INDEX_FILE_STEM: &str = "reprgen";

/// Receiver of the fragments produced by a session.
///
/// Fragments may arrive in any order. A destination seen twice in one session
/// is a fatal error.
pub trait OutputSink {
    fn add_marker_definition(&mut self, fragment: MarkerDefinitionFragment) -> GenerateResult<()>;

    fn add_fragment(&mut self, fragment: GeneratedFragment) -> GenerateResult<()>;

    /// Called once after the last fragment of a session
    fn finish(&mut self) -> GenerateResult<()> {
        Ok(())
    }
}

/// Keeps fragments in memory, keyed by destination
#[derive(Debug, Default)]
pub struct MemorySink {
    marker_definition: Option<MarkerDefinitionFragment>,
    fragments: BTreeMap<DestinationId, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_definition(&self) -> Option<&MarkerDefinitionFragment> {
        self.marker_definition.as_ref()
    }

    pub fn fragments(&self) -> &BTreeMap<DestinationId, String> {
        &self.fragments
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.fragments
            .get(&DestinationId::new(id))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn is_taken(&self, id: &DestinationId) -> bool {
        self.fragments.contains_key(id)
            || self
                .marker_definition
                .as_ref()
                .is_some_and(|marker| &marker.id == id)
    }
}

impl OutputSink for MemorySink {
    fn add_marker_definition(&mut self, fragment: MarkerDefinitionFragment) -> GenerateResult<()> {
        if self.is_taken(&fragment.id) {
            return Err(GenerateError::duplicate(fragment.id.as_str()));
        }
        self.marker_definition = Some(fragment);
        Ok(())
    }

    fn add_fragment(&mut self, fragment: GeneratedFragment) -> GenerateResult<()> {
        if self.is_taken(&fragment.id) {
            return Err(GenerateError::duplicate(fragment.id.as_str()));
        }
        self.fragments.insert(fragment.id, fragment.body);
        Ok(())
    }
}

/// Writes one file per fragment (`<id>.g.<ext>`) into an output directory.
///
/// Files whose contents did not change are left untouched so that build tools
/// keyed on modification times do not rebuild. `finish` writes an index file
/// (`reprgen.<ext>`) referencing every file of the session.
pub struct DirSink {
    out_dir: PathBuf,
    generator: Box<dyn CodeGenerator>,
    header: bool,
    marker_definition: Option<DestinationId>,
    written: BTreeMap<DestinationId, PathBuf>,
    unchanged: usize,
}

impl DirSink {
    pub fn new(out_dir: impl Into<PathBuf>, options: &GenerateOptions) -> GenerateResult<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).map_err(|e| GenerateError::io(&out_dir, e))?;

        Ok(Self {
            out_dir,
            generator: options.target.generator(),
            header: options.header,
            marker_definition: None,
            written: BTreeMap::new(),
            unchanged: 0,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", INDEX_FILE_STEM, self.generator.file_extension()))
    }

    /// Files written or confirmed this session, keyed by destination
    pub fn written(&self) -> &BTreeMap<DestinationId, PathBuf> {
        &self.written
    }

    /// Number of files whose contents were already up to date
    pub fn unchanged(&self) -> usize {
        self.unchanged
    }

    fn write(&mut self, id: DestinationId, body: &str) -> GenerateResult<()> {
        if self.written.contains_key(&id) {
            return Err(GenerateError::duplicate(id.as_str()));
        }

        let path = self
            .out_dir
            .join(id.file_name(self.generator.file_extension()));
        if !write_if_changed(&path, body)? {
            self.unchanged += 1;
        }

        self.written.insert(id, path);
        Ok(())
    }
}

impl OutputSink for DirSink {
    fn add_marker_definition(&mut self, fragment: MarkerDefinitionFragment) -> GenerateResult<()> {
        self.write(fragment.id.clone(), &fragment.body)?;
        self.marker_definition = Some(fragment.id);
        Ok(())
    }

    fn add_fragment(&mut self, fragment: GeneratedFragment) -> GenerateResult<()> {
        self.write(fragment.id, &fragment.body)
    }

    fn finish(&mut self) -> GenerateResult<()> {
        let extension = self.generator.file_extension();

        // Marker definition first, then fragments in destination order
        let mut file_names = Vec::with_capacity(self.written.len());
        if let Some(id) = &self.marker_definition {
            file_names.push(id.file_name(extension));
        }
        for id in self.written.keys() {
            if Some(id) != self.marker_definition.as_ref() {
                file_names.push(id.file_name(extension));
            }
        }

        let index = self.generator.render_index(&file_names, self.header);
        let path = self.index_path();
        write_if_changed(&path, &index)?;

        debug!(
            "Wrote index {} ({} files, {} unchanged)",
            path.display(),
            file_names.len(),
            self.unchanged
        );

        Ok(())
    }
}

/// Returns `true` when the file was (re)written
fn write_if_changed(path: &Path, contents: &str) -> GenerateResult<bool> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == contents {
            return Ok(false);
        }
    }

    fs::write(path, contents).map_err(|e| GenerateError::io(path, e))?;
    Ok(true)
}
