use anyhow::Result;
use colored::Colorize;
use strata_history::History;
use strata_list::PersistentList;

/// One printed step of the walkthrough
struct Step {
    title: &'static str,
    state: PersistentList<i32>,
}

pub fn demo() -> Result<()> {
    println!("{}", "📚 List history walkthrough".bright_blue().bold());
    println!();

    for step in walkthrough()? {
        println!("{}", step.title.bright_white());
        println!("  {:?}", step.state);
    }

    println!();
    println!("{}", "✅ Done".green().bold());
    Ok(())
}

fn walkthrough() -> Result<Vec<Step>> {
    let mut steps = Vec::new();

    let list = PersistentList::new().add(1).add(2).add(3);
    let mut history = History::new(list.clone());
    steps.push(Step {
        title: "Initial state:",
        state: history.current().clone(),
    });

    let list = list.add(4);
    history.commit(list.clone());
    let list = list.add(5);
    history.commit(list);
    steps.push(Step {
        title: "State after adding elements:",
        state: history.current().clone(),
    });

    history.undo()?;
    steps.push(Step {
        title: "State after undo:",
        state: history.current().clone(),
    });

    history.redo()?;
    steps.push(Step {
        title: "State after redo:",
        state: history.current().clone(),
    });

    let list = history.current().remove(0)?;
    history.commit(list);
    steps.push(Step {
        title: "State after removing element:",
        state: history.current().clone(),
    });

    Ok(steps)
}
