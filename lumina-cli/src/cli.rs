use clap::{Parser, Subcommand};

/// Lumina - a quiet social feed, in your terminal.
#[derive(Parser, Debug)]
#[command(name = "lumina", version)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the feed laid out in masonry columns
    Feed {
        /// Viewport width in pixels, mapped to a column count
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Explicit column count (overrides --width)
        #[arg(long)]
        columns: Option<usize>,
    },

    /// Find souls by name or username
    Souls {
        /// Search text (empty lists everyone)
        #[arg(default_value = "")]
        query: String,
    },

    /// Show a user's profile
    Profile {
        /// User id
        user: String,
    },

    /// Create a post and show the resulting feed
    Post {
        /// Post text or caption
        #[arg(default_value = "")]
        text: String,

        /// Media URL; makes this an image post
        #[arg(long)]
        media: Option<String>,

        /// Media aspect ratio (width / height)
        #[arg(long)]
        aspect: Option<f64>,

        /// Post anonymously
        #[arg(long)]
        anonymous: bool,

        /// Tag, may be repeated
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Viewport width used to show the feed afterwards
        #[arg(long, default_value_t = 1280)]
        width: u32,
    },

    /// List whisper threads, or open one
    Whispers {
        /// Contact user id
        contact: Option<String>,

        /// Send a text whisper to the contact first
        #[arg(long, requires = "contact")]
        send: Option<String>,
    },

    /// List circles, or open one
    Circles {
        /// Circle id
        circle: Option<String>,

        /// Publish a post to the circle first
        #[arg(long, requires = "circle")]
        publish: Option<String>,

        /// Publish anonymously
        #[arg(long, requires = "publish")]
        anonymous: bool,
    },

    /// Ask the AI inspiration service about an aesthetic
    Inspire {
        /// What you are looking for
        query: String,

        /// Model name (overrides LUMINA_MODEL)
        #[arg(long)]
        model: Option<String>,

        /// Service base URL (overrides LUMINA_ENDPOINT)
        #[arg(long)]
        endpoint: Option<String>,

        /// Request timeout in seconds (overrides LUMINA_TIMEOUT_SECS)
        #[arg(long)]
        timeout: Option<u64>,
    },
}
