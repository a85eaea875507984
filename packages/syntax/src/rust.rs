//! Rust front end: lowers `syn` items into the declaration model.
//!
//! Mapping rules:
//!
//! - `struct` items become [`TypeDeclaration`]s, every other item becomes an
//!   [`OtherDeclaration`] labelled with its kind
//! - the module path of the item is the namespace (`a/b.rs` → `a::b`, inline
//!   `mod` blocks nest)
//! - attributes are markers, named by their path as written; doc comments are
//!   not markers
//! - named fields are property-like, tuple fields are not
//! - `pub` is public, `pub(crate)` is internal, anything narrower is other
//! - a struct is reachable when its own visibility and that of every enclosing
//!   module let the crate root name it, and none of them is `#[cfg]`-gated

use crate::ast::{
    DeclarationNode, Marker, MemberDeclaration, MemberKind, OtherDeclaration, TypeDeclaration,
    Visibility,
};
use crate::error::{SyntaxError, SyntaxResult};
use crate::source::Snapshot;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path};
use syn::ext::IdentExt;
use syn::{Attribute, Fields, GenericParam, Item, ItemStruct};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Result of loading a source tree
#[derive(Debug, Default)]
pub struct LoadedSource {
    pub snapshot: Snapshot,
    /// Files that could not be parsed; they contribute no declarations
    pub warnings: Vec<SyntaxError>,
    pub files: usize,
}

/// Parse one Rust file whose items live in `namespace`
pub fn parse_rust_source(source: &str, namespace: &[String]) -> syn::Result<Vec<DeclarationNode>> {
    Ok(lower_file(source, namespace)?.nodes)
}

/// Declarations of one file plus the out-of-line modules (`mod name;`) it
/// declares, each with whether the root can reach it
#[derive(Debug, Default)]
struct LoweredFile {
    nodes: Vec<DeclarationNode>,
    modules: Vec<(Vec<String>, bool)>,
}

fn lower_file(source: &str, namespace: &[String]) -> syn::Result<LoweredFile> {
    let file = syn::parse_file(source)?;
    let mut lowered = LoweredFile::default();
    collect_items(&file.items, namespace, true, &mut lowered);
    Ok(lowered)
}

/// Load every `.rs` file below `root`, visiting files in sorted path order.
///
/// A file only contributes reachable types when every module on its path is
/// declared by its parent with enough visibility and without `#[cfg]`.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn load_rust_dir(root: &Path) -> SyntaxResult<LoadedSource> {
    if !root.is_dir() {
        return Err(SyntaxError::NotADirectory(root.to_path_buf()));
    }

    let mut loaded = LoadedSource::default();
    let mut parsed: Vec<(Vec<String>, Vec<DeclarationNode>)> = Vec::new();
    let mut declared: BTreeMap<Vec<String>, bool> = BTreeMap::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            SyntaxError::io(path, source)
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }

        let Some(namespace) = module_path_for(root, path) else {
            debug!("Skipping {}: no module path", path.display());
            continue;
        };

        let content = fs::read_to_string(path).map_err(|e| SyntaxError::io(path, e))?;
        loaded.files += 1;

        match lower_file(&content, &namespace) {
            Ok(lowered) => {
                for (module, reachable) in lowered.modules {
                    *declared.entry(module).or_insert(false) |= reachable;
                }
                parsed.push((namespace, lowered.nodes));
            }
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                loaded.warnings.push(SyntaxError::parse(path, err.to_string()));
            }
        }
    }

    for (module, mut nodes) in parsed {
        if !module_reachable(&declared, &module) {
            debug!("Module {} is not reachable from the root", module.join("::"));
            for node in &mut nodes {
                if let DeclarationNode::Type(decl) = node {
                    decl.reachable = false;
                }
            }
        }
        loaded.snapshot.extend(nodes);
    }

    debug!(
        "Loaded {} declarations from {} files",
        loaded.snapshot.len(),
        loaded.files
    );

    Ok(loaded)
}

fn module_reachable(declared: &BTreeMap<Vec<String>, bool>, module: &[String]) -> bool {
    (1..=module.len()).all(|depth| declared.get(&module[..depth]).copied().unwrap_or(false))
}

/// Module path of `file` relative to the crate source root `root`
pub fn module_path_for(root: &Path, file: &Path) -> Option<Vec<String>> {
    let relative = file.strip_prefix(root).ok()?;

    let mut segments = Vec::new();
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_str()?.to_string()),
                _ => return None,
            }
        }
    }

    let stem = relative.file_stem()?.to_str()?;
    match stem {
        "mod" => {}
        "lib" | "main" if segments.is_empty() => {}
        other => segments.push(other.to_string()),
    }

    Some(segments)
}

fn collect_items(items: &[Item], namespace: &[String], reachable: bool, out: &mut LoweredFile) {
    for item in items {
        match item {
            Item::Struct(item) => out.nodes.push(lower_struct(item, namespace, reachable).into()),
            Item::Mod(item) => {
                let name = item.ident.unraw().to_string();
                out.nodes
                    .push(other("mod", Some(name.clone()), namespace, &item.attrs).into());

                let mut nested = namespace.to_vec();
                nested.push(name);
                let nested_reachable = reachable
                    && visible_from_root(&item.vis, namespace.len())
                    && !is_cfg_gated(&item.attrs);

                match &item.content {
                    Some((_, content)) => collect_items(content, &nested, nested_reachable, out),
                    None => out.modules.push((nested, nested_reachable)),
                }
            }
            item => out.nodes.push(lower_other(item, namespace).into()),
        }
    }
}

fn lower_struct(item: &ItemStruct, namespace: &[String], reachable: bool) -> TypeDeclaration {
    let generics = item
        .generics
        .params
        .iter()
        .map(|param| match param {
            GenericParam::Type(param) => param.ident.to_string(),
            GenericParam::Lifetime(param) => param.lifetime.to_string(),
            GenericParam::Const(param) => param.ident.to_string(),
        })
        .collect();

    let members = match &item.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .filter_map(|field| {
                let ident = field.ident.as_ref()?;
                Some(MemberDeclaration::new(
                    ident.unraw().to_string(),
                    lower_visibility(&field.vis),
                    MemberKind::Property,
                ))
            })
            .collect(),
        Fields::Unnamed(fields) => fields
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, field)| {
                MemberDeclaration::new(
                    index.to_string(),
                    lower_visibility(&field.vis),
                    MemberKind::Other,
                )
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    TypeDeclaration {
        namespace: namespace.to_vec(),
        name: item.ident.unraw().to_string(),
        generics,
        members,
        markers: lower_markers(&item.attrs),
        reachable: reachable
            && visible_from_root(&item.vis, namespace.len())
            && !is_cfg_gated(&item.attrs),
    }
}

fn lower_other(item: &Item, namespace: &[String]) -> OtherDeclaration {
    let (kind, name, attrs): (&str, Option<String>, &[Attribute]) = match item {
        Item::Const(item) => ("const", Some(item.ident.to_string()), &item.attrs),
        Item::Enum(item) => ("enum", Some(item.ident.to_string()), &item.attrs),
        Item::ExternCrate(item) => ("extern crate", Some(item.ident.to_string()), &item.attrs),
        Item::Fn(item) => ("fn", Some(item.sig.ident.to_string()), &item.attrs),
        Item::ForeignMod(item) => ("extern block", None, &item.attrs),
        Item::Impl(item) => ("impl", None, &item.attrs),
        Item::Macro(item) => ("macro", item.ident.as_ref().map(|i| i.to_string()), &item.attrs),
        Item::Static(item) => ("static", Some(item.ident.to_string()), &item.attrs),
        Item::Trait(item) => ("trait", Some(item.ident.to_string()), &item.attrs),
        Item::TraitAlias(item) => ("trait alias", Some(item.ident.to_string()), &item.attrs),
        Item::Type(item) => ("type", Some(item.ident.to_string()), &item.attrs),
        Item::Union(item) => ("union", Some(item.ident.to_string()), &item.attrs),
        Item::Use(item) => ("use", None, &item.attrs),
        _ => ("other", None, &[]),
    };

    other(kind, name, namespace, attrs)
}

fn other(kind: &str, name: Option<String>, namespace: &[String], attrs: &[Attribute]) -> OtherDeclaration {
    OtherDeclaration {
        kind: kind.to_string(),
        name,
        namespace: namespace.to_vec(),
        markers: lower_markers(attrs),
    }
}

fn lower_markers(attrs: &[Attribute]) -> Vec<Marker> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .map(|attr| {
            let path = attr.path();
            let joined = path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join("::");
            if path.leading_colon.is_some() {
                Marker::new(format!("::{}", joined))
            } else {
                Marker::new(joined)
            }
        })
        .collect()
}

fn lower_visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(restricted)
            if restricted.in_token.is_none() && restricted.path.is_ident("crate") =>
        {
            Visibility::Internal
        }
        _ => Visibility::Other,
    }
}

/// Whether an item with `vis`, declared in a module `depth` levels below the
/// root, can be named from the root
fn visible_from_root(vis: &syn::Visibility, depth: usize) -> bool {
    match vis {
        syn::Visibility::Public(_) => true,
        syn::Visibility::Inherited => depth == 0,
        syn::Visibility::Restricted(restricted) => {
            let path = &restricted.path;
            if path.is_ident("crate") {
                true
            } else if path.is_ident("super") {
                depth <= 1
            } else if path.is_ident("self") {
                depth == 0
            } else {
                false
            }
        }
    }
}

fn is_cfg_gated(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("cfg"))
}
