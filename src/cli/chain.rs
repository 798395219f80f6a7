//! Chained subcommands, after https://github.com/clap-rs/clap/issues/2222#issuecomment-2524152894

use clap::{Args, FromArgMatches, Subcommand};

/// `[Args]` of one step, optionally followed by another step parsed from `U`.
#[derive(Debug, Clone)]
pub struct Chain<T, U>
where
    T: Args,
    U: Subcommand,
{
    /// Arguments of this step.
    pub step: T,
    /// The step to run afterwards, if any.
    pub then: Option<Box<U>>,
}

impl<T, U> Chain<T, U>
where
    T: Args,
    U: Subcommand,
{
    pub fn into_parts(self) -> (T, Option<U>) {
        (self.step, self.then.map(|then| *then))
    }
}

impl<T, U> Args for Chain<T, U>
where
    T: Args,
    U: Subcommand,
{
    fn augment_args(cmd: clap::Command) -> clap::Command {
        T::augment_args(cmd).defer(|cmd| U::augment_subcommands(cmd.disable_help_subcommand(true)))
    }
    fn augment_args_for_update(cmd: clap::Command) -> clap::Command {
        Self::augment_args(cmd)
    }
}

impl<T, U> FromArgMatches for Chain<T, U>
where
    T: Args,
    U: Subcommand,
{
    fn from_arg_matches(matches: &clap::ArgMatches) -> Result<Self, clap::Error> {
        let step = T::from_arg_matches(matches)?;
        // `U` looks up the matched subcommand itself, so it is handed these
        // matches rather than the subcommand's.
        let then = if matches.subcommand().is_some() {
            Some(U::from_arg_matches(matches)?)
        } else {
            None
        };
        Ok(Self {
            step,
            then: then.map(Box::new),
        })
    }
    fn update_from_arg_matches(&mut self, matches: &clap::ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}
