use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use once_cell::sync::Lazy;
use unicode_width::UnicodeWidthStr;

use annuaire::api::AnnuaireApi;
use annuaire::commands::{CmdMessage, CmdResult, MessageLevel};
use annuaire::error::{AnnuaireError, Result};
use annuaire::model::{AlbumPhoto, Member, MemberDraft, SearchField, PLACEHOLDER_LOGO};
use annuaire::platform::{
    CardWriter, ConfirmPrompt, FileImageEncoder, ImageEncoder, ShareOutcome, ShareTarget,
    TerminalPrompt, TerminalShare, VcfFileWriter,
};
use annuaire::seed;
use annuaire::store::Directory;

mod args;
use args::{Cli, ShellCommand, ShellLine};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: AnnuaireApi,
    encoder: FileImageEncoder,
    prompt: TerminalPrompt,
    share: TerminalShare,
    cards: VcfFileWriter,
    /// Members as last rendered; the source for numéro → id resolution.
    listed: Vec<Member>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    print_banner();
    refresh_members(&mut ctx)?;

    let stdin = io::stdin();
    loop {
        print!("{} ", "annuaire>".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => match handle(&mut ctx, parsed.command) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => eprintln!("{} {}", "Erreur :".red(), e),
            },
            // Covers `help`, `--help` and parse errors alike.
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let drafts = if cli.vide {
        Vec::new()
    } else if let Some(path) = &cli.seed {
        seed::load_seed(path)?
    } else {
        seed::default_members()
    };

    Ok(AppContext {
        api: AnnuaireApi::new(Directory::with_members(drafts)),
        encoder: FileImageEncoder,
        prompt: TerminalPrompt,
        share: TerminalShare,
        cards: VcfFileWriter::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
        listed: Vec::new(),
    })
}

fn handle(ctx: &mut AppContext, command: ShellCommand) -> Result<bool> {
    match command {
        ShellCommand::List => handle_list(ctx)?,
        ShellCommand::Search { terms, dans } => handle_search(ctx, terms, dans)?,
        ShellCommand::View { numero } => handle_view(ctx, numero),
        ShellCommand::Add => handle_add(ctx)?,
        ShellCommand::Edit { numero } => handle_edit(ctx, numero)?,
        ShellCommand::Remove { numero } => handle_remove(ctx, numero)?,
        ShellCommand::Card { numero } => handle_card(ctx, numero)?,
        ShellCommand::Share { numero } => handle_share(ctx, numero)?,
        ShellCommand::Album => handle_album(ctx)?,
        ShellCommand::Photo { fichier, legende } => handle_photo(ctx, fichier, legende)?,
        ShellCommand::Login => handle_login(ctx)?,
        ShellCommand::Logout => handle_logout(ctx),
        ShellCommand::Quit => {
            println!("Au revoir !");
            return Ok(true);
        }
    }
    Ok(false)
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    refresh_members(ctx)
}

fn handle_search(ctx: &mut AppContext, terms: Vec<String>, dans: Vec<String>) -> Result<()> {
    let mut fields: Vec<SearchField> = Vec::new();
    for raw in &dans {
        match raw.parse::<SearchField>() {
            Ok(field) => {
                if !fields.contains(&field) {
                    fields.push(field);
                }
            }
            Err(e) => {
                let attendus: Vec<String> =
                    SearchField::ALL.iter().map(|f| f.to_string()).collect();
                println!(
                    "{} {}",
                    e.yellow(),
                    format!("(attendus : {})", attendus.join(", ")).dimmed()
                );
                return Ok(());
            }
        }
    }
    // The directory opens with company name as the only checked criterion.
    if fields.is_empty() {
        fields.push(SearchField::CompanyName);
    }

    let query = terms.join(" ");
    let criteria: Vec<&str> = fields.iter().map(|f| f.label()).collect();
    println!(
        "{}",
        format!("Recherche « {} » dans : {}", query, criteria.join(", ")).dimmed()
    );

    let result = ctx.api.search_members(&query, &fields)?;
    remember_listing(ctx, result);
    print_members(&ctx.listed, "Aucun membre ne correspond à votre recherche.");
    Ok(())
}

fn handle_view(ctx: &AppContext, numero: usize) {
    match resolve(ctx, numero) {
        Some(member) => print_member_details(&member),
        None => print_unknown_numero(),
    }
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    if !require_admin(ctx) {
        return Ok(());
    }
    let draft = prompt_draft(&ctx.encoder, None)?;
    let result = ctx.api.add_member(draft)?;
    print_messages(&result.messages);
    refresh_members(ctx)
}

fn handle_edit(ctx: &mut AppContext, numero: usize) -> Result<()> {
    if !require_admin(ctx) {
        return Ok(());
    }
    let Some(member) = resolve(ctx, numero) else {
        print_unknown_numero();
        return Ok(());
    };

    let draft = prompt_draft(&ctx.encoder, Some(&member))?;
    let result = ctx.api.update_member(&member.id, draft)?;
    print_messages(&result.messages);
    refresh_members(ctx)
}

fn handle_remove(ctx: &mut AppContext, numero: usize) -> Result<()> {
    if !require_admin(ctx) {
        return Ok(());
    }
    let Some(member) = resolve(ctx, numero) else {
        print_unknown_numero();
        return Ok(());
    };

    if !ctx
        .prompt
        .confirm("Êtes-vous sûr de vouloir supprimer ce membre ?")
    {
        println!("{}", "Suppression annulée.".dimmed());
        return Ok(());
    }

    let result = ctx.api.remove_member(&member.id)?;
    print_messages(&result.messages);
    refresh_members(ctx)
}

fn handle_card(ctx: &mut AppContext, numero: usize) -> Result<()> {
    let Some(member) = resolve(ctx, numero) else {
        print_unknown_numero();
        return Ok(());
    };

    let result = ctx.api.contact_card(&member.id)?;
    if let Some(card) = &result.card {
        let path = ctx.cards.write(&card.filename, &card.contents)?;
        println!(
            "{}",
            format!("Fiche contact enregistrée : {}", path.display()).green()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_share(ctx: &mut AppContext, numero: usize) -> Result<()> {
    let Some(member) = resolve(ctx, numero) else {
        print_unknown_numero();
        return Ok(());
    };

    let result = ctx.api.share_contact(&member.id)?;
    if let Some(payload) = &result.share {
        match ctx.share.share(payload)? {
            ShareOutcome::Shared => println!("{}", "Contact partagé.".green()),
            ShareOutcome::Unsupported => {
                println!(
                    "{}",
                    "La fonction de partage n'est pas disponible ici. \
                     Vous pouvez copier les informations ci-dessous."
                        .dimmed()
                );
                println!("{}", payload.title.bold());
                println!("{}", payload.text);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_album(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_photos()?;
    print_photos(&result.listed_photos);
    Ok(())
}

fn handle_photo(ctx: &mut AppContext, fichier: PathBuf, legende: Vec<String>) -> Result<()> {
    if !fichier.exists() {
        println!(
            "{}",
            format!("Fichier introuvable : {}", fichier.display()).yellow()
        );
        return Ok(());
    }

    let caption = if legende.is_empty() {
        let default = fichier
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_string();
        let input = read_input(&format!("Légende [{}]", default))?;
        Some(if input.is_empty() { default } else { input })
    } else {
        Some(legende.join(" "))
    };

    match ctx.api.upload_photo(&ctx.encoder, &fichier, caption) {
        Ok(result) => {
            print_messages(&result.messages);
            let album = ctx.api.list_photos()?;
            print_photos(&album.listed_photos);
        }
        Err(e) => println!("{} {}", "Image illisible :".yellow(), e),
    }
    Ok(())
}

fn handle_login(ctx: &mut AppContext) -> Result<()> {
    if ctx.api.is_admin() {
        println!("{}", "Vous êtes déjà administrateur.".dimmed());
        return Ok(());
    }
    let password = read_input("Mot de passe")?;
    if ctx.api.login(&password) {
        println!("{}", "Mode administrateur activé.".green());
    } else {
        println!("{}", "Mot de passe incorrect.".red());
    }
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) {
    ctx.api.logout();
    println!("{}", "Mode administrateur désactivé.".dimmed());
}

// --- Listing state ---

fn refresh_members(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_members()?;
    remember_listing(ctx, result);
    print_members(&ctx.listed, "L'annuaire est vide.");
    Ok(())
}

fn remember_listing(ctx: &mut AppContext, result: CmdResult) {
    ctx.listed = result.listed_members;
}

fn resolve(ctx: &AppContext, numero: usize) -> Option<Member> {
    numero.checked_sub(1).and_then(|i| ctx.listed.get(i)).cloned()
}

fn print_unknown_numero() {
    println!(
        "{}",
        "Numéro inconnu. Lancez `list` ou `search` d'abord.".yellow()
    );
}

fn require_admin(ctx: &AppContext) -> bool {
    if ctx.api.is_admin() {
        return true;
    }
    println!(
        "{}",
        "Accès réservé à l'administrateur. Utilisez `login`.".yellow()
    );
    false
}

// --- Interactive form ---

fn read_input(label: &str) -> Result<String> {
    print!("{} : ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(AnnuaireError::Api("unexpected end of input".to_string()));
    }
    Ok(line.trim().to_string())
}

fn read_required(label: &str, current: Option<&str>) -> Result<String> {
    loop {
        let shown = match current {
            Some(value) => format!("{} [{}]", label, value),
            None => label.to_string(),
        };
        let input = read_input(&shown)?;
        if !input.is_empty() {
            return Ok(input);
        }
        if let Some(value) = current {
            return Ok(value.to_string());
        }
        println!("{}", "Ce champ est requis.".yellow());
    }
}

fn read_logo(encoder: &FileImageEncoder, current: Option<&str>) -> Result<String> {
    let label = if current.is_some() {
        "Logo (fichier image, entrée pour conserver l'actuel)"
    } else {
        "Logo (fichier image, entrée pour l'image par défaut)"
    };
    loop {
        let input = read_input(label)?;
        if input.is_empty() {
            return Ok(current
                .map(|c| c.to_string())
                .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string()));
        }
        match encoder.encode(Path::new(&input)) {
            Ok(url) => return Ok(url),
            Err(e) => println!("{} {}", "Image illisible :".yellow(), e),
        }
    }
}

fn prompt_draft(encoder: &FileImageEncoder, current: Option<&Member>) -> Result<MemberDraft> {
    let company_name = read_required(
        "Nom de l'entreprise",
        current.map(|m| m.company_name.as_str()),
    )?;
    let activity = read_required("Activité", current.map(|m| m.activity.as_str()))?;
    let contact_name = read_required("Nom du gérant", current.map(|m| m.contact_name.as_str()))?;
    let phone = read_required("Téléphone", current.map(|m| m.phone.as_str()))?;
    let email = read_required("Email", current.map(|m| m.email.as_str()))?;
    let website = read_required("Site web", current.map(|m| m.website.as_str()))?;
    let company_logo = read_logo(encoder, current.map(|m| m.company_logo.as_str()))?;

    Ok(MemberDraft {
        company_logo,
        company_name,
        activity,
        contact_name,
        phone,
        email,
        website,
    })
}

// --- Rendering ---

const COMPANY_WIDTH: usize = 30;
const ACTIVITY_WIDTH: usize = 26;
const CONTACT_WIDTH: usize = 22;
const CAPTION_WIDTH: usize = 40;
const TIME_WIDTH: usize = 18;

fn print_banner() {
    println!("{} {}", "Annuaire du Club".bold(), version_string().dimmed());
    println!(
        "{}",
        "Tapez `help` pour la liste des commandes, `quit` pour sortir.".dimmed()
    );
}

fn version_string() -> String {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    if IS_RELEASE == "true" || GIT_HASH.is_empty() {
        VERSION.to_string()
    } else {
        format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_members(members: &[Member], empty_message: &str) {
    if members.is_empty() {
        println!("{}", empty_message.dimmed());
        return;
    }
    for (i, member) in members.iter().enumerate() {
        println!(
            "{:>3}. {}{}{}{}",
            i + 1,
            pad_to_width(&member.company_name, COMPANY_WIDTH).bold(),
            pad_to_width(&member.activity, ACTIVITY_WIDTH).normal(),
            pad_to_width(&member.contact_name, CONTACT_WIDTH).normal(),
            member.phone.dimmed()
        );
    }
}

fn print_member_details(member: &Member) {
    println!("{}", member.company_name.bold());
    println!("{}", member.activity);
    println!("Contact : {}", member.contact_name);
    println!("Téléphone : {}", member.phone);
    println!("Email : {}", member.email);
    println!("Site : {}", member.website);
    println!(
        "Logo : {}",
        truncate_to_width(&member.company_logo, 60).dimmed()
    );
}

fn print_photos(photos: &[AlbumPhoto]) {
    if photos.is_empty() {
        println!(
            "{}",
            "L'album est vide. Soyez le premier à ajouter une photo !".dimmed()
        );
        return;
    }
    for (i, photo) in photos.iter().enumerate() {
        println!(
            "{:>3}. {}{}",
            i + 1,
            pad_to_width(&photo.caption, CAPTION_WIDTH),
            format_time_ago(photo.added_at).dimmed()
        );
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width.saturating_sub(2));
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

static TIME_AGO: Lazy<timeago::Formatter<timeago::languages::french::French>> =
    Lazy::new(|| timeago::Formatter::with_language(timeago::languages::french::French));

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = TIME_AGO.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
