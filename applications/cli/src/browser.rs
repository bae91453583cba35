//! Interactive browser over the server's item tree.
//!
//! A single loop owns a stack of crumbs (the folders descended into) and a
//! cache of the current node's items. Descending and going back re-fetch;
//! rejected input re-renders from the cache without touching the server.

use crate::player::Player;
use jellycli_client::{JellyfinClient, MediaItem};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One level of descent: the folder's id and display name.
#[derive(Debug, Clone)]
pub struct Crumb {
    pub id: String,
    pub name: String,
}

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Quit,
    Back,
    Select(i64),
    Other,
}

impl Choice {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim().to_lowercase();
        match trimmed.as_str() {
            "q" => Choice::Quit,
            "b" => Choice::Back,
            _ => trimmed
                .parse::<i64>()
                .map_or(Choice::Other, Choice::Select),
        }
    }
}

/// Interactive navigator session.
pub struct Browser<'a> {
    client: &'a JellyfinClient,
    player: Player,
    path: Vec<Crumb>,
    items: Vec<MediaItem>,
}

impl<'a> Browser<'a> {
    pub fn new(client: &'a JellyfinClient, player: Player) -> Self {
        Self {
            client,
            player,
            path: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Folders descended into, root first. The length is the navigation
    /// depth.
    pub fn path(&self) -> &[Crumb] {
        &self.path
    }

    /// Run the session until the user quits, input ends, or a fetch fails.
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<()> {
        self.items = self.fetch_current().await?;

        loop {
            writeln!(out, "\n=== {} ===", self.breadcrumb())?;

            if self.items.is_empty() {
                writeln!(out, "No items found.")?;
                return Ok(());
            }

            render_items(out, &self.items)?;
            writeln!(out, "\nOptions:")?;
            writeln!(out, "  - Enter item number to browse/play")?;
            writeln!(out, "  - 'b' to go back")?;
            writeln!(out, "  - 'q' to quit")?;
            write!(out, "\nYour choice: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // end of input behaves like quit
                return Ok(());
            }

            match Choice::parse(&line) {
                Choice::Quit => return Ok(()),
                Choice::Back => {
                    if self.path.is_empty() {
                        return Ok(());
                    }
                    self.path.pop();
                    self.items = self.fetch_current().await?;
                }
                Choice::Select(n) => self.select(n, out).await?,
                Choice::Other => writeln!(out, "Invalid input.")?,
            }
        }
    }

    /// Handle a numeric selection. Out-of-range numbers leave the path and
    /// the cached items untouched.
    async fn select<W: Write>(&mut self, choice: i64, out: &mut W) -> anyhow::Result<()> {
        let item = choice
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.items.get(i))
            .cloned();

        let Some(item) = item else {
            writeln!(out, "Invalid selection.")?;
            return Ok(());
        };

        if item.is_folder {
            debug!(folder = %item.id, "Descending");
            let name = item.display_name().to_string();
            self.path.push(Crumb { id: item.id, name });
            self.items = self.fetch_current().await?;
        } else if item.video_type.as_deref() == Some("VideoFile") {
            let url = self.client.download_url(&item.id);
            match self.player.launch(&url, item.display_name()) {
                Ok(()) => writeln!(out, "Playing: {}", item.display_name())?,
                Err(e) => eprintln!("{}", e),
            }
        } else {
            writeln!(out, "Cannot play item: {}", item.display_name())?;
        }

        Ok(())
    }

    async fn fetch_current(&self) -> jellycli_client::Result<Vec<MediaItem>> {
        match self.path.last() {
            Some(crumb) => self.client.children(&crumb.id).await,
            None => self.client.collections().await,
        }
    }

    fn breadcrumb(&self) -> String {
        if self.path.is_empty() {
            "Collections".to_string()
        } else {
            self.path
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(" > ")
        }
    }
}

/// Print an enumerated item listing with folder/playable markers.
///
/// Shared with the non-interactive `--list` and `--browse` output.
pub fn render_items<W: Write>(out: &mut W, items: &[MediaItem]) -> io::Result<()> {
    for (i, item) in items.iter().enumerate() {
        let marker = if item.is_folder { "\u{1f4c1}" } else { "\u{1f3ac}" };
        writeln!(
            out,
            "{}. {} {} (ID: {})",
            i + 1,
            marker,
            item.display_name(),
            item.id
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_commands() {
        assert_eq!(Choice::parse("q\n"), Choice::Quit);
        assert_eq!(Choice::parse(" Q "), Choice::Quit);
        assert_eq!(Choice::parse("b\n"), Choice::Back);
        assert_eq!(Choice::parse("B"), Choice::Back);
    }

    #[test]
    fn parse_reads_integers() {
        assert_eq!(Choice::parse("3\n"), Choice::Select(3));
        assert_eq!(Choice::parse(" 12 "), Choice::Select(12));
        // negative numbers parse; they fail the range check later
        assert_eq!(Choice::parse("-1"), Choice::Select(-1));
        assert_eq!(Choice::parse("0"), Choice::Select(0));
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert_eq!(Choice::parse("quit\n"), Choice::Other);
        assert_eq!(Choice::parse("1.5"), Choice::Other);
        assert_eq!(Choice::parse(""), Choice::Other);
    }
}
