use linked_list::LinkedList;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;
use std::str::FromStr;

/// Keeps prompting until the line parses as a number. Returns `None` when
/// the user closes the session (Ctrl-C / Ctrl-D).
fn prompt_number<N: FromStr>(editor: &mut Editor<(), FileHistory>, prompt: &str) -> Option<N> {
    loop {
        match editor.readline(prompt) {
            Ok(line) => match line.trim().parse() {
                Ok(number) => return Some(number),
                Err(_) => println!("Please enter a whole number."),
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return None,
            Err(err) => {
                println!("Unexpected I/O error: {:?}", err);
                return None;
            }
        }
    }
}

fn print_all(list: &LinkedList<i64>) {
    for value in list {
        println!("{}", value);
    }
    println!();
}

fn main() {
    let mut editor = Editor::<(), FileHistory>::new().expect("Failed to create Editor");
    let mut list: LinkedList<i64> = LinkedList::new();

    let Some(n) = prompt_number::<usize>(&mut editor, "How many elements would you like to add? ")
    else {
        return;
    };
    for i in 1..=n {
        let Some(value) = prompt_number::<i64>(&mut editor, &format!("Element {} = ", i)) else {
            return;
        };
        list.add(value).expect("parsed values are always present");
    }
    print_all(&list);

    let Some(target) = prompt_number::<i64>(&mut editor, "Which element should be deleted? ")
    else {
        return;
    };
    list.delete(target).expect("parsed values are always present");
    print_all(&list);
}
