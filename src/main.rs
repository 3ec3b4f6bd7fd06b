fn main() {
    bot_survival::game::run();
}
