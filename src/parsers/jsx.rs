use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

/// Parse JS/TS/JSX/TSX source code into an AST.
///
/// TSX syntax is a superset of what the scanner feeds in, so a single
/// parser configuration covers all four extensions.
pub fn parse_source(code: &str, file_path: &str) -> Result<ParsedSource> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;
    Ok(ParsedSource { module, source_map })
}
