/// A representative crontab: comments, descriptions, variables,
/// a shell override, and an unrecognized line.
pub const SAMPLE_CRONTAB: &str = "\
# Demo crontab
# ------------

@reboot /usr/bin/bash ~/startup.sh

## Update brew.
30 20 * * * /usr/local/bin/brew update && /usr/local/bin/brew upgrade

FOO=bar
## Print variable.
* * * * * echo $FOO

SHELL=/bin/bash
@hourly echo 'I am echoed by bash!'

not a crontab line
";
