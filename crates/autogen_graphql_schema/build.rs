use std::env;
use std::fs::File;
use std::io::*;

use bookshelf_lib::graphql_api::api_schema_builder;

fn main() -> std::io::Result<()> {
    let out_path = env::current_dir()?.join("schema.graphql");
    let mut f = File::create(&out_path)?;

    let schema = api_schema_builder().finish();
    f.write_all(schema.sdl().as_bytes())?;

    Ok(())
}
