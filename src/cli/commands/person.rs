use crate::cli::commands::{ask_confirmation, open_pool};
use crate::cli::parser::PersonAction;
use crate::config::Config;
use crate::core::countdown::day_count_label;
use crate::core::person::{PersonChanges, PersonLogic};
use crate::core::recurrence::{days_between, next_occurrence};
use crate::core::search::search_people;
use crate::db::{gift_ideas, people};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, RESET, color_for_days, colorize};
use crate::utils::date::format_date;
use crate::utils::formatting::{bold, format_price, optional};
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(action: &PersonAction, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match action {
        PersonAction::Add {
            name,
            email,
            relationship,
            birthday,
            notes,
        } => {
            let person = PersonLogic::add(
                &mut pool,
                name,
                PersonChanges {
                    name: None,
                    email: email.clone(),
                    relationship: relationship.clone(),
                    birthday: birthday.clone(),
                    notes: notes.clone(),
                },
            )?;
            success(format!("Added person #{}: {}", person.id, person.name));
        }

        PersonAction::Edit {
            id,
            name,
            email,
            relationship,
            birthday,
            notes,
        } => {
            let person = PersonLogic::edit(
                &mut pool,
                *id,
                PersonChanges {
                    name: name.clone(),
                    email: email.clone(),
                    relationship: relationship.clone(),
                    birthday: birthday.clone(),
                    notes: notes.clone(),
                },
            )?;
            success(format!("Updated person #{}: {}", person.id, person.name));
        }

        PersonAction::Del { id, yes } => {
            let person = people::load_person(&pool.conn, *id)?.ok_or(AppError::PersonNotFound(*id))?;
            let prompt = format!(
                "Delete {} (#{}) and all their gift ideas? This action is irreversible.",
                person.name, person.id
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            PersonLogic::delete(&mut pool, *id)?;
            success(format!("Person #{} ({}) has been deleted.", id, person.name));
        }

        PersonAction::List { search } => {
            let all = people::load_people(&pool.conn)?;
            let found = search_people(&all, search.as_deref().unwrap_or(""));

            header("👥 People");
            if found.is_empty() {
                info("No people found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "Relationship", "Birthday", "Email"])
                .with_separator(&cfg.separator_char);
            for p in &found {
                table.add_row(vec![
                    p.id.to_string(),
                    p.name.clone(),
                    colorize(&optional(p.relationship.map(|r| r.label())), RESET),
                    colorize(&optional(p.birthday.as_deref()), RESET),
                    colorize(&optional(p.email.as_deref()), RESET),
                ]);
            }
            print!("{}", table.render());
        }

        PersonAction::Show { id } => {
            let p = people::load_person(&pool.conn, *id)?.ok_or(AppError::PersonNotFound(*id))?;

            header(format!("👤 {}", bold(&p.name)));
            println!("ID:           {}", p.id);
            println!("Email:        {}", optional(p.email.as_deref()));
            println!(
                "Relationship: {}",
                optional(p.relationship.map(|r| r.label()))
            );
            println!("Birthday:     {}", optional(p.birthday.as_deref()));

            if let Some(next) = next_occurrence(p.birthday.as_deref(), true, reference) {
                let days = days_between(reference, next);
                println!(
                    "Next:         {} ({}{}{})",
                    format_date(next, &cfg.date_format),
                    color_for_days(days),
                    day_count_label(days, cfg.festive_today),
                    RESET
                );
            }
            if let Some(notes) = &p.notes {
                println!("Notes:        {}", notes);
            }

            let gifts = gift_ideas::load_gift_ideas_by_person(&pool.conn, p.id)?;
            println!();
            if gifts.is_empty() {
                println!("{}No gift ideas yet.{}", GREY, RESET);
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Idea", "Status", "Price"])
                .with_separator(&cfg.separator_char);
            for g in &gifts {
                table.add_row(vec![
                    g.id.to_string(),
                    g.idea.clone(),
                    format!("{} {}", g.status.icon(), g.status.to_db_str()),
                    format_price(g.price),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
