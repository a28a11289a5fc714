use crate::auth::credentials::Profile;
use crate::cli::parser::RegisterArgs;
use crate::config::Config;
use crate::core::register::RegisterLogic;
use crate::db::log::audit;
use crate::errors::AppResult;

pub fn handle(args: &RegisterArgs, cfg: &Config) -> AppResult<()> {
    let profile = Profile {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
    };

    RegisterLogic::register(
        &cfg.credentials_path(),
        &args.username,
        profile,
        &args.new_password,
        &args.role,
        &args.area,
    )?;

    audit(
        &cfg.database_path(),
        "register",
        args.username.trim(),
        &format!("role={} area={}", args.role, args.area),
    );
    Ok(())
}
