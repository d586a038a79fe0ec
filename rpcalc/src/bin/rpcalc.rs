fn main() -> Result<(), String> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        match rpcalc::evaluate(&input) {
            Err(e) => println!("Error: {}", e),
            Ok(result) => println!("{}", result),
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let input = line.trim();
                if input == "q" {
                    return Ok(());
                }
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                match rpcalc::evaluate(input) {
                    Err(e) => println!("Error: {}", e),
                    Ok(result) => println!("{}", result),
                }
            }
        }
    }
}
