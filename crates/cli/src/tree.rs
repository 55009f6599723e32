use std::path::Path;
use structscope_java::JavaSummarizer;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = crate::read_source(path)?;
    print!("{}", JavaSummarizer::new().dump_tree(&source)?);
    Ok(())
}
