use std::io::{BufReader, BufWriter, Read, Write};

use anyhow::Context;

fn stdin() -> anyhow::Result<Vec<u8>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut input_buf: Vec<u8> = vec![];
    reader
        .read_to_end(&mut input_buf)
        .context("failed to read stdin")?;
    Ok(input_buf)
}

fn main() -> anyhow::Result<()> {
    if std::env::var("WSEG_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("WSEG_LOG")
            .write_style("WSEG_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let input_buf = stdin()?;
    let mut input: &[u8] = &input_buf[..];

    let mut output = BufWriter::new(std::io::stdout().lock());
    weighted_segtree::query::run(&mut input, &mut output)?;
    output.flush().context("failed to flush stdout")?;
    Ok(())
}
