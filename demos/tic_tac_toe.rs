use venue_games::game::grid::GridIndex;
use venue_games::game::tic_tac_toe::{GameMove, Sign, TicTacToe};
use venue_games::{AreaCommand, CommandReply, GameArea, Participant};

fn main() {
    env_logger::init();

    let mut area = GameArea::<TicTacToe>::new();
    let alice = Participant::new(1, "alice");
    let bob = Participant::new(2, "bob");

    let reply = area.handle_command(&alice, AreaCommand::JoinGame).unwrap();
    let CommandReply::Joined { game_id } = reply else {
        panic!("join must reply with a game id");
    };
    area.handle_command(&bob, AreaCommand::JoinGame).unwrap();

    let moves = [
        (&alice, 0, 0),
        (&bob, 1, 1),
        (&alice, 0, 1),
        (&bob, 1, 0),
        (&alice, 0, 2),
    ];
    for (actor, row, col) in moves {
        let mov = GameMove::new(GridIndex::new(row, col), Sign::X);
        area.handle_command(actor, AreaCommand::GameMove { game_id, mov })
            .unwrap();
        let info = area.game_info().unwrap();
        println!("{:?}", info.state);
    }

    println!(
        "history: {}",
        serde_json::to_string_pretty(area.history()).unwrap()
    );
}
