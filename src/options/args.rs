//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "disk_cpu_load [OPTIONS] [DEVICE]...";

/// The arguments for disk_cpu_load.
#[derive(Parser, Debug)]
#[command(
    name = "disk_cpu_load",
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub(crate) test_args: TestArgs,

    #[command(flatten)]
    pub(crate) general_args: GeneralArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Test Options")]
pub(crate) struct TestArgs {
    #[arg(
        value_name = "DEVICE",
        action = ArgAction::Append,
        help = "The whole-disk device to read from, with or without '/dev/'.",
        long_help = indoc! {
            "The whole-disk device to read from, with or without the '/dev/' prefix
            (e.g. 'sda' or '/dev/sda'). If given more than once, the last one is used.
            Defaults to /dev/sda."
        }
    )]
    pub(crate) devices: Vec<String>,

    #[arg(
        long = "max-load",
        value_name = "LOAD",
        allow_hyphen_values = true,
        help = "The maximum acceptable CPU load, as a percentage.",
        long_help = "The maximum acceptable CPU load, as a percentage. If the measured load is strictly \
                    greater than this, the test fails. Defaults to 30."
    )]
    pub(crate) max_load: Option<String>,

    #[arg(
        long = "xfer",
        value_name = "MEBIBYTES",
        allow_hyphen_values = true,
        help = "The amount of data to read from the device, in mebibytes.",
        long_help = "The amount of data to read from the device, in mebibytes. The read is done in \
                    1 MiB blocks. Defaults to 4096 (4 GiB)."
    )]
    pub(crate) xfer: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub(crate) struct GeneralArgs {
    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        help = "Sets the location of an optional config file.",
        long_help = indoc! {
            "Sets the location of an optional config file in the TOML format. Values are
            read from its [flags] table (device, max_load, xfer, verbose), and any value
            given on the command line takes precedence."
        }
    )]
    pub(crate) config_location: Option<String>,

    #[arg(
        long,
        help = "Produces more verbose output.",
        long_help = "Prints progress markers around the disk read and the intermediate CPU time values."
    )]
    pub(crate) verbose: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub(crate) struct OtherArgs {
    #[arg(short='h', long, action=ArgAction::Help, help="Prints help info (for more details use `--help`.")]
    help: (),

    #[arg(short='V', long, action=ArgAction::Version, help="Prints version information.")]
    version: (),
}
