//! Line-oriented command loop driving a [`Page`]

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::domain::RentalBackend;
use crate::forms::customer_form::CustomerField;
use crate::forms::movie_form::{MovieField, MovieForm};
use crate::forms::rental_form::{
    RentalField, SelectOption, customer_options, employee_options, movie_options,
};
use crate::forms::FieldErrors;
use crate::views::{CustomerAction, MovieAction, Page};

pub const HELP: &str = "\
Commands:
  show                      redraw the page
  reload                    fetch everything again
  movie add                 fill in and submit the movie form
  movie inc <id>            add one copy
  movie dec <id>            remove one copy
  movie rm <id>             delete a movie
  customer add              fill in and submit the customer form
  customer rm <id>          delete a customer
  customer find-email <e>   look a customer up by email
  customer find-phone <p>   look a customer up by phone
  rental add                fill in and submit the rental form
  rental return <id>        return an open rental
  help                      this text
  quit                      leave

Form prompts: Enter keeps the value in brackets, `-` clears it.
";

/// Answer that empties a form field
const CLEAR: &str = "-";

const LOADING: &str = "Loading...\n";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Reload,
    AddMovie,
    Movie(MovieAction),
    AddCustomer,
    Customer(CustomerAction),
    FindCustomerByEmail(String),
    FindCustomerByPhone(String),
    AddRental,
    ReturnRental(String),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let id = |pos: usize| -> Result<i64, String> {
            let raw = words
                .get(pos)
                .ok_or_else(|| "Missing id".to_string())?;
            raw.parse::<i64>()
                .map_err(|_| format!("Not an id: {}", raw))
        };
        let rest = |pos: usize| -> Result<String, String> {
            if words.len() <= pos {
                return Err("Missing value".to_string());
            }
            Ok(words[pos..].join(" "))
        };

        match words.as_slice() {
            [] | ["show"] => Ok(Command::Show),
            ["reload"] => Ok(Command::Reload),
            ["help"] | ["?"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["movie", "add"] => Ok(Command::AddMovie),
            ["movie", "inc", ..] => Ok(Command::Movie(MovieAction::IncreaseCopies(id(2)?))),
            ["movie", "dec", ..] => Ok(Command::Movie(MovieAction::DecreaseCopies(id(2)?))),
            ["movie", "rm", ..] => Ok(Command::Movie(MovieAction::Delete(id(2)?))),
            ["customer", "add"] => Ok(Command::AddCustomer),
            ["customer", "rm", ..] => Ok(Command::Customer(CustomerAction::Delete(id(2)?))),
            ["customer", "find-email", ..] => Ok(Command::FindCustomerByEmail(rest(2)?)),
            ["customer", "find-phone", ..] => Ok(Command::FindCustomerByPhone(rest(2)?)),
            ["rental", "add"] => Ok(Command::AddRental),
            ["rental", "return", ..] => Ok(Command::ReturnRental(rest(2)?)),
            _ => Err(format!("Unknown command: {} (try `help`)", line.trim())),
        }
    }
}

/// Read commands from `input` until `quit` or end of input
pub async fn run<B, R, W>(page: &mut Page<B>, input: R, mut output: W) -> io::Result<()>
where
    B: RentalBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    write_page(page, &mut output).await?;

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(msg) => {
                output.write_all(format!("{}\n", msg).as_bytes()).await?;
                continue;
            }
        };

        tracing::debug!("Command: {:?}", command);
        let redraw = execute(page, command, &mut lines, &mut output).await?;

        for note in page.state.take_notifications() {
            output.write_all(format!("{}\n", note).as_bytes()).await?;
        }
        if redraw {
            write_page(page, &mut output).await?;
        }
    }

    output.flush().await
}

/// Run one command; returns whether the page should be redrawn
async fn execute<B, R, W>(
    page: &mut Page<B>,
    command: Command,
    lines: &mut Lines<R>,
    output: &mut W,
) -> io::Result<bool>
where
    B: RentalBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match command {
        Command::Show => Ok(true),
        Command::Help => {
            output.write_all(HELP.as_bytes()).await?;
            Ok(false)
        }
        Command::Quit => Ok(false),
        Command::Reload => {
            write_loading(output).await?;
            page.state.load_all().await;
            Ok(true)
        }
        Command::Movie(action) => {
            write_loading(output).await?;
            action.dispatch(&mut page.state).await;
            Ok(true)
        }
        Command::Customer(action) => {
            write_loading(output).await?;
            action.dispatch(&mut page.state).await;
            Ok(true)
        }
        Command::AddMovie => {
            for field in MovieField::ALL {
                let label = match field {
                    MovieField::ReleaseYear => {
                        format!("{} ({})", field.label(), MovieForm::year_hint())
                    }
                    _ => field.label().to_string(),
                };
                let current = page.movie_form.value(field).to_string();
                match prompt(lines, output, &label, &current).await? {
                    Some(value) => page.movie_form.set(field, &value),
                    None => return Ok(false),
                }
            }
            match page.movie_form.submit() {
                Ok(movie) => {
                    write_loading(output).await?;
                    page.state.create_movie(movie).await;
                    Ok(true)
                }
                Err(errors) => write_errors(&errors, output).await,
            }
        }
        Command::AddCustomer => {
            for field in CustomerField::ALL {
                let draft = page.customer_form.draft();
                let current = match field {
                    CustomerField::Name => draft.name.clone(),
                    CustomerField::Email => draft.email.clone(),
                    CustomerField::Phone => draft.phone.clone(),
                };
                match prompt(lines, output, field.label(), &current).await? {
                    Some(value) => page.customer_form.set(field, &value),
                    None => return Ok(false),
                }
            }
            match page.customer_form.submit() {
                Ok(customer) => {
                    write_loading(output).await?;
                    page.state.create_customer(customer).await;
                    Ok(true)
                }
                Err(errors) => write_errors(&errors, output).await,
            }
        }
        Command::AddRental => {
            for field in RentalField::ALL {
                let options = match field {
                    RentalField::Customer => customer_options(page.state.customers()),
                    RentalField::Movie => movie_options(page.state.movies()),
                    RentalField::Employee => employee_options(page.state.employees()),
                };
                write_options(output, field.label(), &options).await?;
                match prompt(lines, output, &format!("{} id", field.label()), "").await? {
                    Some(value) => page.rental_form.select_raw(field, &value),
                    None => return Ok(false),
                }
            }
            match page.rental_form.submit() {
                Ok(rental) => {
                    write_loading(output).await?;
                    page.state.create_rental(rental).await;
                    Ok(true)
                }
                Err(errors) => write_errors(&errors, output).await,
            }
        }
        Command::ReturnRental(raw) => {
            page.rental_form.set_return_id(&raw);
            match page.rental_form.take_return_id() {
                Some(id) => {
                    write_loading(output).await?;
                    page.state.return_rental(id).await;
                    Ok(true)
                }
                None => {
                    output.write_all(b"Enter a rental id\n").await?;
                    Ok(false)
                }
            }
        }
        Command::FindCustomerByEmail(email) => {
            write_loading(output).await?;
            let found = page.state.backend().find_customer_by_email(&email).await;
            write_lookup(output, found).await?;
            Ok(false)
        }
        Command::FindCustomerByPhone(phone) => {
            write_loading(output).await?;
            let found = page.state.backend().find_customer_by_phone(&phone).await;
            write_lookup(output, found).await?;
            Ok(false)
        }
    }
}

/// Ask for one value. An empty answer keeps `current`, [`CLEAR`] empties the
/// field; `None` on end of input.
async fn prompt<R, W>(
    lines: &mut Lines<R>,
    output: &mut W,
    label: &str,
    current: &str,
) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let question = if current.is_empty() {
        format!("  {}: ", label)
    } else {
        format!("  {} [{}]: ", label, current)
    };
    output.write_all(question.as_bytes()).await?;
    output.flush().await?;

    Ok(lines.next_line().await?.map(|answer| {
        match answer.trim() {
            "" => current.to_string(),
            CLEAR => String::new(),
            answer => answer.to_string(),
        }
    }))
}

async fn write_loading<W: AsyncWrite + Unpin>(output: &mut W) -> io::Result<()> {
    output.write_all(LOADING.as_bytes()).await?;
    output.flush().await
}

/// Print field errors; the page is not redrawn
async fn write_errors<W: AsyncWrite + Unpin>(
    errors: &FieldErrors,
    output: &mut W,
) -> io::Result<bool> {
    for (field, message) in errors.iter() {
        output
            .write_all(format!("  {}: {}\n", field, message).as_bytes())
            .await?;
    }
    Ok(false)
}

async fn write_options<W: AsyncWrite + Unpin>(
    output: &mut W,
    label: &str,
    options: &[SelectOption],
) -> io::Result<()> {
    if options.is_empty() {
        return output
            .write_all(format!("  (no {} loaded)\n", label.to_lowercase()).as_bytes())
            .await;
    }
    for option in options {
        output
            .write_all(format!("    {}\n", option.label).as_bytes())
            .await?;
    }
    Ok(())
}

async fn write_lookup<W: AsyncWrite + Unpin>(
    output: &mut W,
    found: Result<Option<crate::models::Customer>, crate::domain::ClientError>,
) -> io::Result<()> {
    let line = match found {
        Ok(Some(c)) => format!("#{} {} • {} • {}\n", c.id, c.name, c.email, c.phone),
        Ok(None) => "No customer found\n".to_string(),
        Err(e) if e.status() == Some(404) => "No customer found\n".to_string(),
        Err(e) => format!("[error] {}\n", e.user_message()),
    };
    output.write_all(line.as_bytes()).await
}

async fn write_page<B, W>(page: &Page<B>, output: &mut W) -> io::Result<()>
where
    B: RentalBackend,
    W: AsyncWrite + Unpin,
{
    output.write_all(page.render().as_bytes()).await?;
    output.flush().await
}
