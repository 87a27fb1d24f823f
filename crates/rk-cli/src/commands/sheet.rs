use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use rk_dice::{RandomSource, seeded_rng};
use rk_sheet::list::toggle_equipped;
use rk_sheet::{
    Ability, Character, CheckRoll, DeathSave, EditTarget, Effort, ItemList, MasteryChange,
    NoteList, NumberEdit, SheetStore, StoreConfig,
};

/// The store and dice shared by every sheet subcommand.
pub struct SheetContext {
    store: SheetStore,
    rng: Box<dyn RandomSource>,
}

impl SheetContext {
    pub fn new(path: &Path, seed: Option<u64>) -> Self {
        Self {
            store: SheetStore::new(StoreConfig::default().with_path(path)),
            rng: Box::new(seeded_rng(seed)),
        }
    }

    fn load(&self, name: &str) -> Result<Character, String> {
        self.store
            .find_by_name(name)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("character not found: \"{name}\""))
    }

    fn save(&self, character: &Character) -> Result<(), String> {
        self.store.save(character).map_err(|e| e.to_string())
    }
}

pub fn new(ctx: &SheetContext, name: &str, class: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("character name cannot be empty".into());
    }
    if ctx
        .store
        .find_by_name(name)
        .map_err(|e| e.to_string())?
        .is_some()
    {
        return Err(format!("a character named \"{name}\" already exists"));
    }

    let created = ctx
        .store
        .create(Character::new(name.trim(), class.trim()))
        .map_err(|e| e.to_string())?;
    println!(
        "  {} {} ({})",
        "Created".green().bold(),
        created.name.bold(),
        created.game
    );
    Ok(())
}

pub fn list(ctx: &SheetContext) -> Result<(), String> {
    let sheets = ctx.store.load_all().map_err(|e| e.to_string())?;
    if sheets.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Class", "Game", "HP", "Created"]);
    for c in &sheets {
        let class = if c.class_name.is_empty() {
            "-".to_string()
        } else {
            c.class_name.clone()
        };
        table.add_row(vec![
            c.name.clone(),
            class,
            c.game.to_string(),
            format!("{}/{}", c.hit_points.current, c.hit_points.max),
            c.created_date.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", sheets.len());
    Ok(())
}

pub fn show(ctx: &SheetContext, name: &str) -> Result<(), String> {
    let c = ctx.load(name)?;

    let class = if c.class_name.is_empty() {
        c.game.to_string()
    } else {
        format!("{}, {}", c.class_name, c.game)
    };
    println!("  {} [{}]", c.name.bold(), class.dimmed());
    if !c.bio_form.is_empty() {
        println!("  bio-form:  {}", c.bio_form);
    }
    println!("  created:   {}", c.created_date);
    println!();

    let hp = &c.hit_points;
    print!("  HP:        {}/{}", hp.current, hp.max);
    if hp.is_dying() {
        print!("  {}", format!("dying, {} turn(s) left", hp.death_count).red());
    }
    println!();
    println!(
        "  Armor:     {} (loot {:+})",
        c.armor_total(),
        c.loot_bonuses.armor
    );
    println!("  Coin:      {}", c.coin);
    println!("  Hero coin: {}", if c.hero_coin { "yes" } else { "no" });
    println!("  Mastery:   {}", c.mastery);
    println!();

    let mut stats = Table::new();
    stats.set_content_arrangement(ContentArrangement::Dynamic);
    stats.set_header(vec!["Ability", "Base", "Loot", "Total"]);
    for ability in Ability::ALL {
        stats.add_row(vec![
            ability.short().to_string(),
            c.ability_scores.get(ability).to_string(),
            c.loot_bonuses.ability(ability).to_string(),
            c.ability_total(ability).to_string(),
        ]);
    }
    println!("{stats}");

    let mut effort = Table::new();
    effort.set_content_arrangement(ContentArrangement::Dynamic);
    effort.set_header(vec!["Effort", "Die", "Base", "Loot", "Total"]);
    for e in Effort::ALL {
        effort.add_row(vec![
            e.label().to_string(),
            e.die().to_string(),
            c.effort.get(e).to_string(),
            c.loot_bonuses.effort(e).to_string(),
            c.effort_total(e).to_string(),
        ]);
    }
    println!("{effort}");

    if !c.loot.is_empty() {
        println!();
        println!("  {}", "Loot".bold());
        for (i, item) in c.loot.iter().enumerate() {
            println!("  {:>2}. {item}", i + 1);
        }
    }

    for which in NoteList::ALL {
        let entries = c.list(which);
        if entries.is_empty() {
            continue;
        }
        println!();
        println!("  {}", which.title().bold());
        for entry in entries {
            println!("    - {entry}");
        }
    }

    if !c.story.is_empty() {
        println!();
        for line in c.story.lines() {
            println!("  {}", line.trim());
        }
    }

    Ok(())
}

pub fn delete(ctx: &SheetContext, name: &str) -> Result<(), String> {
    let c = ctx.load(name)?;
    let removed = ctx
        .store
        .delete(c.sheet_id.as_ref(), &c.name, c.game)
        .map_err(|e| e.to_string())?;
    println!("  {} {}", "Deleted".red().bold(), removed.name);
    Ok(())
}

pub fn set(ctx: &mut SheetContext, name: &str, field: &str, value: &str) -> Result<(), String> {
    let mut c = ctx.load(name)?;
    let target: EditTarget = field.parse().map_err(|e: rk_sheet::SheetError| e.to_string())?;
    let applied = NumberEdit::new(target, value)
        .commit(&mut c, &mut *ctx.rng)
        .map_err(|e| e.to_string())?;
    ctx.save(&c)?;

    println!("  {}: {} = {}", c.name.bold(), applied.target, applied.value);
    if let Some(counter) = applied.death_counter {
        println!(
            "  {} A D4 was rolled: {counter} turn(s) to roll a natural 20 or be stabilized by an ally's INT or WIS roll.",
            "You are dying!".red().bold()
        );
    }
    if let Some(change) = applied.mastery {
        print_mastery_change(change);
    }
    Ok(())
}

fn print_check(roll: &CheckRoll) {
    println!("  {}", roll.title().bold());
    println!("  {}", roll.detail());
}

pub fn check(ctx: &mut SheetContext, name: &str, ability: &str) -> Result<(), String> {
    let c = ctx.load(name)?;
    let ability: Ability = ability.parse().map_err(|e: rk_sheet::SheetError| e.to_string())?;
    print_check(&c.check(ability, &mut *ctx.rng));
    Ok(())
}

pub fn effort(ctx: &mut SheetContext, name: &str, effort: &str) -> Result<(), String> {
    let c = ctx.load(name)?;
    let effort: Effort = effort.parse().map_err(|e: rk_sheet::SheetError| e.to_string())?;
    print_check(&c.effort_roll(effort, &mut *ctx.rng));
    Ok(())
}

pub fn armor(ctx: &mut SheetContext, name: &str) -> Result<(), String> {
    let c = ctx.load(name)?;
    print_check(&c.armor_check(&mut *ctx.rng));
    Ok(())
}

pub fn death_save(ctx: &mut SheetContext, name: &str) -> Result<(), String> {
    let mut c = ctx.load(name)?;
    let outcome = c.hit_points.death_save(&mut *ctx.rng);
    if outcome != DeathSave::NotNeeded {
        ctx.save(&c)?;
    }

    let text = outcome.to_string();
    let styled = match outcome {
        DeathSave::NotNeeded => text.dimmed(),
        DeathSave::Revived { .. } => text.green().bold(),
        DeathSave::Died { .. } => text.red().bold(),
        DeathSave::StillDying { .. } => text.yellow(),
    };
    println!("  {styled}");
    Ok(())
}

fn print_mastery_change(change: MasteryChange) {
    match change {
        MasteryChange::Completed => println!(
            "  {} Learn a new Mastery Ability; mastery points start again.",
            "Mastery completed!".green().bold()
        ),
        MasteryChange::Regressed => println!("  {}", "A completed mastery was given back.".yellow()),
        MasteryChange::Counted => {}
    }
}

pub fn mastery(ctx: &SheetContext, name: &str, delta: i32) -> Result<(), String> {
    let mut c = ctx.load(name)?;
    let change = c.mastery.adjust(delta);
    ctx.save(&c)?;
    println!("  {}: mastery {}", c.name.bold(), c.mastery);
    print_mastery_change(change);
    Ok(())
}

pub fn note(ctx: &SheetContext, name: &str, list: &str, text: &str) -> Result<(), String> {
    let mut c = ctx.load(name)?;
    let which: NoteList = list.parse().map_err(|e: rk_sheet::SheetError| e.to_string())?;
    c.list_mut(which).add_text(text).map_err(|e| e.to_string())?;
    ctx.save(&c)?;
    println!(
        "  {}: added to {} ({} entries)",
        c.name.bold(),
        which.title(),
        c.list(which).len()
    );
    Ok(())
}

pub fn gear(ctx: &SheetContext, name: &str, text: &str) -> Result<(), String> {
    let mut c = ctx.load(name)?;
    c.loot.add_text(text).map_err(|e| e.to_string())?;
    ctx.save(&c)?;
    println!("  {}: carrying {}", c.name.bold(), text.trim());
    Ok(())
}

pub fn equip(ctx: &SheetContext, name: &str, position: usize) -> Result<(), String> {
    let mut c = ctx.load(name)?;
    let index = position
        .checked_sub(1)
        .ok_or_else(|| format!("no loot at position {position}"))?;
    let equipped = toggle_equipped(&mut c.loot, index).map_err(|e| e.to_string())?;
    ctx.save(&c)?;
    let state = if equipped { "equipped" } else { "carried" };
    println!("  {}: {} is now {state}", c.name.bold(), c.loot[index].item_description);
    Ok(())
}
