use rota_core::entities::{Profile, ProfileDraft};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};

/// Handle `rota schema`. Always JSON: a schema has no tabular form.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.kind {
        SchemaKind::Profiles => schemars::schema_for!(Vec<Profile>),
        SchemaKind::ProfileDraft => schemars::schema_for!(ProfileDraft),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
