//! Translation keys used by the server together with their English text.
use crate::text::TextComponent;

/// A translation key known to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// The translation key.
    pub key: &'static str,
}

impl Translation {
    /// Creates a translation from its key.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// The translation without arguments.
    #[must_use]
    pub const fn msg(&self) -> TextComponent {
        TextComponent::const_translate(self.key)
    }

    /// The translation with the given arguments.
    #[must_use]
    pub fn message(&self, args: impl IntoIterator<Item = TextComponent>) -> TextComponent {
        TextComponent::translate(self.key, args)
    }
}

macro_rules! translations {
    ($($name:ident = $key:literal => $text:literal;)*) => {
        $(
            #[doc = $text]
            pub const $name: Translation = Translation::new($key);
        )*

        /// English text of every known translation key.
        pub static TRANSLATIONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
            $($key => $text,)*
        };
    };
}

translations! {
    // Engine
    COMMAND_UNKNOWN_COMMAND = "command.unknown.command" => "Unknown or incomplete command, see below for error";
    COMMAND_UNKNOWN_ARGUMENT = "command.unknown.argument" => "Incorrect argument for command";
    COMMAND_FAILED = "command.failed" => "An unexpected error occurred trying to execute that command";
    COMMAND_EXPECTED_SEPARATOR = "command.expected.separator" => "Expected whitespace to end one argument, but found trailing data";
    PERMISSIONS_REQUIRES_PLAYER = "permissions.requires.player" => "A player is required to run this command here";
    PERMISSIONS_REQUIRES_ENTITY = "permissions.requires.entity" => "An entity is required to run this command here";
    COMMANDS_HELP_FAILED = "commands.help.failed" => "Unknown command or insufficient permissions";
    CHAT_TYPE_ANNOUNCEMENT = "chat.type.announcement" => "[%s] %s";

    // Arguments
    ARGUMENT_ENTITY_NOTFOUND_ENTITY = "argument.entity.notfound.entity" => "No entity was found";
    ARGUMENT_ENTITY_NOTFOUND_PLAYER = "argument.entity.notfound.player" => "No player was found";
    ARGUMENT_ENTITY_TOOMANY = "argument.entity.toomany" => "Only one entity is allowed, but the provided selector allows more than one";
    ARGUMENT_PLAYER_TOOMANY = "argument.player.toomany" => "Only one player is allowed, but the provided selector allows more than one";
    ARGUMENT_PLAYER_ENTITIES = "argument.player.entities" => "Only players may be affected by this command, but the provided selector includes entities";
    ARGUMENT_SCOREHOLDER_EMPTY = "argument.scoreHolder.empty" => "No relevant score holders could be found";
    ARGUMENT_POS_OUTOFWORLD = "argument.pos.outofworld" => "That position is out of this world!";
    ARGUMENT_DIMENSION_INVALID = "argument.dimension.invalid" => "Unknown dimension '%s'";
    ARGUMENT_BLOCK_ID_INVALID = "argument.block.id.invalid" => "Unknown block type '%s'";
    ARGUMENT_ENTITY_TYPE_INVALID = "argument.entity.invalid" => "Unknown entity type '%s'";
    ARGUMENTS_OBJECTIVE_NOTFOUND = "arguments.objective.notFound" => "Unknown scoreboard objective '%s'";
    ARGUMENTS_OBJECTIVE_READONLY = "arguments.objective.readonly" => "Scoreboard objective '%s' is read-only";
    ARGUMENTS_OPERATION_DIV0 = "arguments.operation.div0" => "Cannot divide by zero";
    ARGUMENT_CRITERIA_INVALID = "argument.criteria.invalid" => "Unknown criterion '%s'";
    TEAM_NOTFOUND = "team.notFound" => "Unknown team '%s'";
    ADVANCEMENT_ADVANCEMENTNOTFOUND = "advancement.advancementNotFound" => "Unknown advancement: %s";
    ATTRIBUTE_UNKNOWN = "attribute.unknown" => "Unknown attribute";

    // Game modes and difficulty
    GAME_MODE_SURVIVAL = "gameMode.survival" => "Survival Mode";
    GAME_MODE_CREATIVE = "gameMode.creative" => "Creative Mode";
    GAME_MODE_ADVENTURE = "gameMode.adventure" => "Adventure Mode";
    GAME_MODE_SPECTATOR = "gameMode.spectator" => "Spectator Mode";
    OPTIONS_DIFFICULTY_PEACEFUL = "options.difficulty.peaceful" => "Peaceful";
    OPTIONS_DIFFICULTY_EASY = "options.difficulty.easy" => "Easy";
    OPTIONS_DIFFICULTY_NORMAL = "options.difficulty.normal" => "Normal";
    OPTIONS_DIFFICULTY_HARD = "options.difficulty.hard" => "Hard";

    // advancement
    COMMANDS_ADVANCEMENT_CRITERIONNOTFOUND = "commands.advancement.criterionNotFound" => "The advancement %1$s does not contain the criterion '%2$s'";
    COMMANDS_ADVANCEMENT_GRANT_ONE_TO_ONE_SUCCESS = "commands.advancement.grant.one.to.one.success" => "Granted the advancement %s to %s";
    COMMANDS_ADVANCEMENT_GRANT_ONE_TO_ONE_FAILURE = "commands.advancement.grant.one.to.one.failure" => "Couldn't grant advancement %s to %s as they already have it";
    COMMANDS_ADVANCEMENT_GRANT_ONE_TO_MANY_SUCCESS = "commands.advancement.grant.one.to.many.success" => "Granted the advancement %s to %s players";
    COMMANDS_ADVANCEMENT_GRANT_ONE_TO_MANY_FAILURE = "commands.advancement.grant.one.to.many.failure" => "Couldn't grant advancement %s to %s players as they already have it";
    COMMANDS_ADVANCEMENT_GRANT_MANY_TO_ONE_SUCCESS = "commands.advancement.grant.many.to.one.success" => "Granted %s advancements to %s";
    COMMANDS_ADVANCEMENT_GRANT_MANY_TO_ONE_FAILURE = "commands.advancement.grant.many.to.one.failure" => "Couldn't grant %s advancements to %s as they already have them";
    COMMANDS_ADVANCEMENT_GRANT_MANY_TO_MANY_SUCCESS = "commands.advancement.grant.many.to.many.success" => "Granted %s advancements to %s players";
    COMMANDS_ADVANCEMENT_GRANT_MANY_TO_MANY_FAILURE = "commands.advancement.grant.many.to.many.failure" => "Couldn't grant %s advancements to %s players as they already have them";
    COMMANDS_ADVANCEMENT_GRANT_CRITERION_TO_ONE_SUCCESS = "commands.advancement.grant.criterion.to.one.success" => "Granted criterion '%s' of advancement %s to %s";
    COMMANDS_ADVANCEMENT_GRANT_CRITERION_TO_ONE_FAILURE = "commands.advancement.grant.criterion.to.one.failure" => "Couldn't grant criterion '%s' of advancement %s to %s as they already have it";
    COMMANDS_ADVANCEMENT_GRANT_CRITERION_TO_MANY_SUCCESS = "commands.advancement.grant.criterion.to.many.success" => "Granted criterion '%s' of advancement %s to %s players";
    COMMANDS_ADVANCEMENT_GRANT_CRITERION_TO_MANY_FAILURE = "commands.advancement.grant.criterion.to.many.failure" => "Couldn't grant criterion '%s' of advancement %s to %s players as they already have it";
    COMMANDS_ADVANCEMENT_REVOKE_ONE_TO_ONE_SUCCESS = "commands.advancement.revoke.one.to.one.success" => "Revoked the advancement %s from %s";
    COMMANDS_ADVANCEMENT_REVOKE_ONE_TO_ONE_FAILURE = "commands.advancement.revoke.one.to.one.failure" => "Couldn't revoke advancement %s from %s as they don't have it";
    COMMANDS_ADVANCEMENT_REVOKE_ONE_TO_MANY_SUCCESS = "commands.advancement.revoke.one.to.many.success" => "Revoked the advancement %s from %s players";
    COMMANDS_ADVANCEMENT_REVOKE_ONE_TO_MANY_FAILURE = "commands.advancement.revoke.one.to.many.failure" => "Couldn't revoke advancement %s from %s players as they don't have it";
    COMMANDS_ADVANCEMENT_REVOKE_MANY_TO_ONE_SUCCESS = "commands.advancement.revoke.many.to.one.success" => "Revoked %s advancements from %s";
    COMMANDS_ADVANCEMENT_REVOKE_MANY_TO_ONE_FAILURE = "commands.advancement.revoke.many.to.one.failure" => "Couldn't revoke %s advancements from %s as they don't have them";
    COMMANDS_ADVANCEMENT_REVOKE_MANY_TO_MANY_SUCCESS = "commands.advancement.revoke.many.to.many.success" => "Revoked %s advancements from %s players";
    COMMANDS_ADVANCEMENT_REVOKE_MANY_TO_MANY_FAILURE = "commands.advancement.revoke.many.to.many.failure" => "Couldn't revoke %s advancements from %s players as they don't have them";
    COMMANDS_ADVANCEMENT_REVOKE_CRITERION_TO_ONE_SUCCESS = "commands.advancement.revoke.criterion.to.one.success" => "Revoked criterion '%s' of advancement %s from %s";
    COMMANDS_ADVANCEMENT_REVOKE_CRITERION_TO_ONE_FAILURE = "commands.advancement.revoke.criterion.to.one.failure" => "Couldn't revoke criterion '%s' of advancement %s from %s as they don't have it";
    COMMANDS_ADVANCEMENT_REVOKE_CRITERION_TO_MANY_SUCCESS = "commands.advancement.revoke.criterion.to.many.success" => "Revoked criterion '%s' of advancement %s from %s players";
    COMMANDS_ADVANCEMENT_REVOKE_CRITERION_TO_MANY_FAILURE = "commands.advancement.revoke.criterion.to.many.failure" => "Couldn't revoke criterion '%s' of advancement %s from %s players as they don't have it";

    // attribute
    COMMANDS_ATTRIBUTE_FAILED_ENTITY = "commands.attribute.failed.entity" => "%s is not a valid entity for this command";
    COMMANDS_ATTRIBUTE_FAILED_NO_ATTRIBUTE = "commands.attribute.failed.no_attribute" => "Entity %s has no attribute %s";
    COMMANDS_ATTRIBUTE_FAILED_NO_MODIFIER = "commands.attribute.failed.no_modifier" => "Attribute %s for entity %s has no modifier %s";
    COMMANDS_ATTRIBUTE_FAILED_MODIFIER_ALREADY_PRESENT = "commands.attribute.failed.modifier_already_present" => "Modifier %s is already present on attribute %s for entity %s";
    COMMANDS_ATTRIBUTE_VALUE_GET_SUCCESS = "commands.attribute.value.get.success" => "Value of attribute %s for entity %s is %s";
    COMMANDS_ATTRIBUTE_BASE_VALUE_GET_SUCCESS = "commands.attribute.base_value.get.success" => "Base value of attribute %s for entity %s is %s";
    COMMANDS_ATTRIBUTE_BASE_VALUE_SET_SUCCESS = "commands.attribute.base_value.set.success" => "Base value for attribute %s for entity %s set to %s";
    COMMANDS_ATTRIBUTE_BASE_VALUE_RESET_SUCCESS = "commands.attribute.base_value.reset.success" => "Base value for attribute %s for entity %s reset to default %s";
    COMMANDS_ATTRIBUTE_MODIFIER_ADD_SUCCESS = "commands.attribute.modifier.add.success" => "Added modifier %s to attribute %s for entity %s";
    COMMANDS_ATTRIBUTE_MODIFIER_REMOVE_SUCCESS = "commands.attribute.modifier.remove.success" => "Removed modifier %s from attribute %s for entity %s";
    COMMANDS_ATTRIBUTE_MODIFIER_VALUE_GET_SUCCESS = "commands.attribute.modifier.value.get.success" => "Value of modifier %s on attribute %s for entity %s is %s";

    // bossbar
    COMMANDS_BOSSBAR_CREATE_SUCCESS = "commands.bossbar.create.success" => "Created custom bossbar %s";
    COMMANDS_BOSSBAR_CREATE_FAILED = "commands.bossbar.create.failed" => "A bossbar already exists with the ID '%s'";
    COMMANDS_BOSSBAR_REMOVE_SUCCESS = "commands.bossbar.remove.success" => "Removed custom bossbar %s";
    COMMANDS_BOSSBAR_UNKNOWN = "commands.bossbar.unknown" => "No bossbar exists with the ID '%s'";
    COMMANDS_BOSSBAR_LIST_BARS_NONE = "commands.bossbar.list.bars.none" => "There are no custom bossbars active";
    COMMANDS_BOSSBAR_LIST_BARS_SOME = "commands.bossbar.list.bars.some" => "There are %s custom bossbar(s) active: %s";
    COMMANDS_BOSSBAR_SET_NAME_SUCCESS = "commands.bossbar.set.name.success" => "Custom bossbar %s has been renamed";
    COMMANDS_BOSSBAR_SET_NAME_UNCHANGED = "commands.bossbar.set.name.unchanged" => "Nothing changed. That's already the name of this bossbar";
    COMMANDS_BOSSBAR_SET_COLOR_SUCCESS = "commands.bossbar.set.color.success" => "Custom bossbar %s has changed color";
    COMMANDS_BOSSBAR_SET_COLOR_UNCHANGED = "commands.bossbar.set.color.unchanged" => "Nothing changed. That's already the color of this bossbar";
    COMMANDS_BOSSBAR_SET_STYLE_SUCCESS = "commands.bossbar.set.style.success" => "Custom bossbar %s has changed style";
    COMMANDS_BOSSBAR_SET_STYLE_UNCHANGED = "commands.bossbar.set.style.unchanged" => "Nothing changed. That's already the style of this bossbar";
    COMMANDS_BOSSBAR_SET_VALUE_SUCCESS = "commands.bossbar.set.value.success" => "Custom bossbar %s has changed value to %s";
    COMMANDS_BOSSBAR_SET_VALUE_UNCHANGED = "commands.bossbar.set.value.unchanged" => "Nothing changed. That's already the value of this bossbar";
    COMMANDS_BOSSBAR_SET_MAX_SUCCESS = "commands.bossbar.set.max.success" => "Custom bossbar %s has changed maximum to %s";
    COMMANDS_BOSSBAR_SET_MAX_UNCHANGED = "commands.bossbar.set.max.unchanged" => "Nothing changed. That's already the max of this bossbar";
    COMMANDS_BOSSBAR_SET_VISIBLE_SUCCESS_VISIBLE = "commands.bossbar.set.visible.success.visible" => "Custom bossbar %s is now visible";
    COMMANDS_BOSSBAR_SET_VISIBLE_SUCCESS_HIDDEN = "commands.bossbar.set.visible.success.hidden" => "Custom bossbar %s is now hidden";
    COMMANDS_BOSSBAR_SET_VISIBILITY_UNCHANGED_VISIBLE = "commands.bossbar.set.visibility.unchanged.visible" => "Nothing changed. The bossbar is already visible";
    COMMANDS_BOSSBAR_SET_VISIBILITY_UNCHANGED_HIDDEN = "commands.bossbar.set.visibility.unchanged.hidden" => "Nothing changed. The bossbar is already hidden";
    COMMANDS_BOSSBAR_SET_PLAYERS_SUCCESS_NONE = "commands.bossbar.set.players.success.none" => "Custom bossbar %s no longer has any players";
    COMMANDS_BOSSBAR_SET_PLAYERS_SUCCESS_SOME = "commands.bossbar.set.players.success.some" => "Custom bossbar %s now has %s player(s): %s";
    COMMANDS_BOSSBAR_SET_PLAYERS_UNCHANGED = "commands.bossbar.set.players.unchanged" => "Nothing changed. Those players are already on the bossbar with nobody to add or remove";
    COMMANDS_BOSSBAR_GET_VALUE = "commands.bossbar.get.value" => "Custom bossbar %s has a value of %s";
    COMMANDS_BOSSBAR_GET_MAX = "commands.bossbar.get.max" => "Custom bossbar %s has a maximum of %s";
    COMMANDS_BOSSBAR_GET_VISIBLE_VISIBLE = "commands.bossbar.get.visible.visible" => "Custom bossbar %s is currently shown";
    COMMANDS_BOSSBAR_GET_VISIBLE_HIDDEN = "commands.bossbar.get.visible.hidden" => "Custom bossbar %s is currently hidden";
    COMMANDS_BOSSBAR_GET_PLAYERS_NONE = "commands.bossbar.get.players.none" => "Custom bossbar %s has no players currently online";
    COMMANDS_BOSSBAR_GET_PLAYERS_SOME = "commands.bossbar.get.players.some" => "Custom bossbar %s has %s player(s) currently online: %s";

    // execute
    COMMANDS_EXECUTE_CONDITIONAL_PASS = "commands.execute.conditional.pass" => "Test passed";
    COMMANDS_EXECUTE_CONDITIONAL_PASS_COUNT = "commands.execute.conditional.pass_count" => "Test passed, count: %s";
    COMMANDS_EXECUTE_CONDITIONAL_FAIL = "commands.execute.conditional.fail" => "Test failed";
    COMMANDS_EXECUTE_CONDITIONAL_FAIL_COUNT = "commands.execute.conditional.fail_count" => "Test failed, count: %s";
    COMMANDS_EXECUTE_BLOCKS_TOOBIG = "commands.execute.blocks.toobig" => "Too many blocks in the specified area (maximum %s, specified %s)";

    // scoreboard
    COMMANDS_SCOREBOARD_OBJECTIVES_ADD_SUCCESS = "commands.scoreboard.objectives.add.success" => "Created new objective %s";
    COMMANDS_SCOREBOARD_OBJECTIVES_ADD_DUPLICATE = "commands.scoreboard.objectives.add.duplicate" => "An objective already exists by that name";
    COMMANDS_SCOREBOARD_OBJECTIVES_REMOVE_SUCCESS = "commands.scoreboard.objectives.remove.success" => "Removed objective %s";
    COMMANDS_SCOREBOARD_OBJECTIVES_LIST_EMPTY = "commands.scoreboard.objectives.list.empty" => "There are no objectives";
    COMMANDS_SCOREBOARD_OBJECTIVES_LIST_SUCCESS = "commands.scoreboard.objectives.list.success" => "There are %s objective(s): %s";
    COMMANDS_SCOREBOARD_OBJECTIVES_DISPLAY_CLEARED = "commands.scoreboard.objectives.display.cleared" => "Cleared any objectives in display slot %s";
    COMMANDS_SCOREBOARD_OBJECTIVES_DISPLAY_SET = "commands.scoreboard.objectives.display.set" => "Set display slot %s to show objective %s";
    COMMANDS_SCOREBOARD_OBJECTIVES_DISPLAY_ALREADYEMPTY = "commands.scoreboard.objectives.display.alreadyEmpty" => "Nothing changed. That display slot is already empty";
    COMMANDS_SCOREBOARD_OBJECTIVES_DISPLAY_ALREADYSET = "commands.scoreboard.objectives.display.alreadySet" => "Nothing changed. That display slot is already showing that objective";
    COMMANDS_SCOREBOARD_OBJECTIVES_MODIFY_DISPLAYNAME = "commands.scoreboard.objectives.modify.displayname" => "Changed the display name of %s to %s";
    COMMANDS_SCOREBOARD_OBJECTIVES_MODIFY_RENDERTYPE = "commands.scoreboard.objectives.modify.rendertype" => "Changed the render type of objective %s";
    COMMANDS_SCOREBOARD_PLAYERS_LIST_EMPTY = "commands.scoreboard.players.list.empty" => "There are no tracked entities";
    COMMANDS_SCOREBOARD_PLAYERS_LIST_SUCCESS = "commands.scoreboard.players.list.success" => "There are %s tracked entity/entities: %s";
    COMMANDS_SCOREBOARD_PLAYERS_LIST_ENTITY_EMPTY = "commands.scoreboard.players.list.entity.empty" => "%s has no scores to show";
    COMMANDS_SCOREBOARD_PLAYERS_LIST_ENTITY_SUCCESS = "commands.scoreboard.players.list.entity.success" => "%s has %s score(s):";
    COMMANDS_SCOREBOARD_PLAYERS_LIST_ENTITY_ENTRY = "commands.scoreboard.players.list.entity.entry" => "%s: %s";
    COMMANDS_SCOREBOARD_PLAYERS_SET_SUCCESS_SINGLE = "commands.scoreboard.players.set.success.single" => "Set %s for %s to %s";
    COMMANDS_SCOREBOARD_PLAYERS_SET_SUCCESS_MULTIPLE = "commands.scoreboard.players.set.success.multiple" => "Set %s for %s entities to %s";
    COMMANDS_SCOREBOARD_PLAYERS_ADD_SUCCESS_SINGLE = "commands.scoreboard.players.add.success.single" => "Added %s to %s for %s (now %s)";
    COMMANDS_SCOREBOARD_PLAYERS_ADD_SUCCESS_MULTIPLE = "commands.scoreboard.players.add.success.multiple" => "Added %s to %s for %s entities";
    COMMANDS_SCOREBOARD_PLAYERS_REMOVE_SUCCESS_SINGLE = "commands.scoreboard.players.remove.success.single" => "Removed %s from %s for %s (now %s)";
    COMMANDS_SCOREBOARD_PLAYERS_REMOVE_SUCCESS_MULTIPLE = "commands.scoreboard.players.remove.success.multiple" => "Removed %s from %s for %s entities";
    COMMANDS_SCOREBOARD_PLAYERS_RESET_ALL_SINGLE = "commands.scoreboard.players.reset.all.single" => "Reset all scores for %s";
    COMMANDS_SCOREBOARD_PLAYERS_RESET_ALL_MULTIPLE = "commands.scoreboard.players.reset.all.multiple" => "Reset all scores for %s entities";
    COMMANDS_SCOREBOARD_PLAYERS_RESET_SPECIFIC_SINGLE = "commands.scoreboard.players.reset.specific.single" => "Reset %s for %s";
    COMMANDS_SCOREBOARD_PLAYERS_RESET_SPECIFIC_MULTIPLE = "commands.scoreboard.players.reset.specific.multiple" => "Reset %s for %s entities";
    COMMANDS_SCOREBOARD_PLAYERS_GET_SUCCESS = "commands.scoreboard.players.get.success" => "%s has %s %s";
    COMMANDS_SCOREBOARD_PLAYERS_GET_NULL = "commands.scoreboard.players.get.null" => "Can't get value of %s for %s; none is set";
    COMMANDS_SCOREBOARD_PLAYERS_ENABLE_SUCCESS_SINGLE = "commands.scoreboard.players.enable.success.single" => "Enabled trigger %s for %s";
    COMMANDS_SCOREBOARD_PLAYERS_ENABLE_SUCCESS_MULTIPLE = "commands.scoreboard.players.enable.success.multiple" => "Enabled trigger %s for %s entities";
    COMMANDS_SCOREBOARD_PLAYERS_ENABLE_FAILED = "commands.scoreboard.players.enable.failed" => "Nothing changed. That trigger is already enabled";
    COMMANDS_SCOREBOARD_PLAYERS_ENABLE_INVALID = "commands.scoreboard.players.enable.invalid" => "Enable only works on trigger-objectives";
    COMMANDS_SCOREBOARD_PLAYERS_OPERATION_SUCCESS_SINGLE = "commands.scoreboard.players.operation.success.single" => "Set %s for %s to %s";
    COMMANDS_SCOREBOARD_PLAYERS_OPERATION_SUCCESS_MULTIPLE = "commands.scoreboard.players.operation.success.multiple" => "Updated %s for %s entities";

    // trigger
    COMMANDS_TRIGGER_SIMPLE_SUCCESS = "commands.trigger.simple.success" => "Triggered %s";
    COMMANDS_TRIGGER_ADD_SUCCESS = "commands.trigger.add.success" => "Triggered %s (added %s to value)";
    COMMANDS_TRIGGER_SET_SUCCESS = "commands.trigger.set.success" => "Triggered %s (set value to %s)";
    COMMANDS_TRIGGER_FAILED_UNPRIMED = "commands.trigger.failed.unprimed" => "You cannot trigger this objective yet";
    COMMANDS_TRIGGER_FAILED_INVALID = "commands.trigger.failed.invalid" => "You can only trigger objectives that are 'trigger' type";

    // teleport
    COMMANDS_TELEPORT_SUCCESS_ENTITY_SINGLE = "commands.teleport.success.entity.single" => "Teleported %s to %s";
    COMMANDS_TELEPORT_SUCCESS_ENTITY_MULTIPLE = "commands.teleport.success.entity.multiple" => "Teleported %s entities to %s";
    COMMANDS_TELEPORT_SUCCESS_LOCATION_SINGLE = "commands.teleport.success.location.single" => "Teleported %s to %s, %s, %s";
    COMMANDS_TELEPORT_SUCCESS_LOCATION_MULTIPLE = "commands.teleport.success.location.multiple" => "Teleported %s entities to %s, %s, %s";
    COMMANDS_TELEPORT_INVALIDPOSITION = "commands.teleport.invalidPosition" => "Invalid position for teleport";

    // team
    COMMANDS_TEAM_ADD_SUCCESS = "commands.team.add.success" => "Created team %s";
    COMMANDS_TEAM_ADD_DUPLICATE = "commands.team.add.duplicate" => "A team already exists by that name";
    COMMANDS_TEAM_REMOVE_SUCCESS = "commands.team.remove.success" => "Removed team %s";
    COMMANDS_TEAM_EMPTY_SUCCESS = "commands.team.empty.success" => "Removed %s member(s) from team %s";
    COMMANDS_TEAM_EMPTY_UNCHANGED = "commands.team.empty.unchanged" => "Nothing changed. That team is already empty";
    COMMANDS_TEAM_JOIN_SUCCESS_SINGLE = "commands.team.join.success.single" => "Added %s to team %s";
    COMMANDS_TEAM_JOIN_SUCCESS_MULTIPLE = "commands.team.join.success.multiple" => "Added %s entities to team %s";
    COMMANDS_TEAM_LEAVE_SUCCESS_SINGLE = "commands.team.leave.success.single" => "Removed %s from any team";
    COMMANDS_TEAM_LEAVE_SUCCESS_MULTIPLE = "commands.team.leave.success.multiple" => "Removed %s entities from any team";
    COMMANDS_TEAM_LIST_TEAMS_EMPTY = "commands.team.list.teams.empty" => "There are no teams";
    COMMANDS_TEAM_LIST_TEAMS_SUCCESS = "commands.team.list.teams.success" => "There are %s team(s): %s";
    COMMANDS_TEAM_LIST_MEMBERS_EMPTY = "commands.team.list.members.empty" => "There are no members on team %s";
    COMMANDS_TEAM_LIST_MEMBERS_SUCCESS = "commands.team.list.members.success" => "Team %s has %s member(s): %s";
    COMMANDS_TEAM_OPTION_NAME_SUCCESS = "commands.team.option.name.success" => "Updated the name of team %s";
    COMMANDS_TEAM_OPTION_NAME_UNCHANGED = "commands.team.option.name.unchanged" => "Nothing changed. That team already has that name";
    COMMANDS_TEAM_OPTION_COLOR_SUCCESS = "commands.team.option.color.success" => "Updated the color for team %s to %s";
    COMMANDS_TEAM_OPTION_COLOR_UNCHANGED = "commands.team.option.color.unchanged" => "Nothing changed. That team already has that color";
    COMMANDS_TEAM_OPTION_FRIENDLYFIRE_ENABLED = "commands.team.option.friendlyfire.enabled" => "Enabled friendly fire for team %s";
    COMMANDS_TEAM_OPTION_FRIENDLYFIRE_DISABLED = "commands.team.option.friendlyfire.disabled" => "Disabled friendly fire for team %s";
    COMMANDS_TEAM_OPTION_FRIENDLYFIRE_ALREADYENABLED = "commands.team.option.friendlyfire.alreadyEnabled" => "Nothing changed. Friendly fire is already enabled for that team";
    COMMANDS_TEAM_OPTION_FRIENDLYFIRE_ALREADYDISABLED = "commands.team.option.friendlyfire.alreadyDisabled" => "Nothing changed. Friendly fire is already disabled for that team";
    COMMANDS_TEAM_OPTION_SEEFRIENDLYINVISIBLES_ENABLED = "commands.team.option.seeFriendlyInvisibles.enabled" => "Team %s can now see invisible teammates";
    COMMANDS_TEAM_OPTION_SEEFRIENDLYINVISIBLES_DISABLED = "commands.team.option.seeFriendlyInvisibles.disabled" => "Team %s can no longer see invisible teammates";
    COMMANDS_TEAM_OPTION_SEEFRIENDLYINVISIBLES_ALREADYENABLED = "commands.team.option.seeFriendlyInvisibles.alreadyEnabled" => "Nothing changed. That team can already see invisible teammates";
    COMMANDS_TEAM_OPTION_SEEFRIENDLYINVISIBLES_ALREADYDISABLED = "commands.team.option.seeFriendlyInvisibles.alreadyDisabled" => "Nothing changed. That team already can't see invisible teammates";
    COMMANDS_TEAM_OPTION_NAMETAGVISIBILITY_SUCCESS = "commands.team.option.nametagVisibility.success" => "Nametag visibility for team %s is now \"%s\"";
    COMMANDS_TEAM_OPTION_NAMETAGVISIBILITY_UNCHANGED = "commands.team.option.nametagVisibility.unchanged" => "Nothing changed. Nametag visibility is already that value";
    COMMANDS_TEAM_OPTION_DEATHMESSAGEVISIBILITY_SUCCESS = "commands.team.option.deathMessageVisibility.success" => "Death message visibility for team %s is now \"%s\"";
    COMMANDS_TEAM_OPTION_DEATHMESSAGEVISIBILITY_UNCHANGED = "commands.team.option.deathMessageVisibility.unchanged" => "Nothing changed. Death message visibility is already that value";
    COMMANDS_TEAM_OPTION_COLLISIONRULE_SUCCESS = "commands.team.option.collisionRule.success" => "Collision rule for team %s is now \"%s\"";
    COMMANDS_TEAM_OPTION_COLLISIONRULE_UNCHANGED = "commands.team.option.collisionRule.unchanged" => "Nothing changed. Collision rule is already that value";
    COMMANDS_TEAM_OPTION_PREFIX_SUCCESS = "commands.team.option.prefix.success" => "Team prefix set to %s";
    COMMANDS_TEAM_OPTION_SUFFIX_SUCCESS = "commands.team.option.suffix.success" => "Team suffix set to %s";

    // worldborder
    COMMANDS_WORLDBORDER_CENTER_SUCCESS = "commands.worldborder.center.success" => "Set the center of the world border to %s, %s";
    COMMANDS_WORLDBORDER_CENTER_FAILED = "commands.worldborder.center.failed" => "Nothing changed. The world border is already centered there";
    COMMANDS_WORLDBORDER_DAMAGE_AMOUNT_SUCCESS = "commands.worldborder.damage.amount.success" => "Set the world border damage to %s per block each second";
    COMMANDS_WORLDBORDER_DAMAGE_AMOUNT_FAILED = "commands.worldborder.damage.amount.failed" => "Nothing changed. The world border damage is already that amount";
    COMMANDS_WORLDBORDER_DAMAGE_BUFFER_SUCCESS = "commands.worldborder.damage.buffer.success" => "Set the world border damage buffer to %s block(s)";
    COMMANDS_WORLDBORDER_DAMAGE_BUFFER_FAILED = "commands.worldborder.damage.buffer.failed" => "Nothing changed. The world border damage buffer is already that distance";
    COMMANDS_WORLDBORDER_GET = "commands.worldborder.get" => "The world border is currently %s block(s) wide";
    COMMANDS_WORLDBORDER_SET_IMMEDIATE = "commands.worldborder.set.immediate" => "Set the world border to %s block(s) wide";
    COMMANDS_WORLDBORDER_SET_GROW = "commands.worldborder.set.grow" => "Growing the world border to %s blocks wide over %s seconds";
    COMMANDS_WORLDBORDER_SET_SHRINK = "commands.worldborder.set.shrink" => "Shrinking the world border to %s block(s) wide over %s second(s)";
    COMMANDS_WORLDBORDER_SET_FAILED_NOCHANGE = "commands.worldborder.set.failed.nochange" => "Nothing changed. The world border is already that size";
    COMMANDS_WORLDBORDER_SET_FAILED_SMALL = "commands.worldborder.set.failed.small" => "World border cannot be smaller than 1 block wide";
    COMMANDS_WORLDBORDER_SET_FAILED_BIG = "commands.worldborder.set.failed.big" => "World border cannot be bigger than %s blocks wide";
    COMMANDS_WORLDBORDER_SET_FAILED_FAR = "commands.worldborder.set.failed.far" => "World border cannot be further out than %s blocks";
    COMMANDS_WORLDBORDER_WARNING_DISTANCE_SUCCESS = "commands.worldborder.warning.distance.success" => "Set the world border warning distance to %s block(s)";
    COMMANDS_WORLDBORDER_WARNING_DISTANCE_FAILED = "commands.worldborder.warning.distance.failed" => "Nothing changed. The world border warning is already that distance";
    COMMANDS_WORLDBORDER_WARNING_TIME_SUCCESS = "commands.worldborder.warning.time.success" => "Set the world border warning time to %s second(s)";
    COMMANDS_WORLDBORDER_WARNING_TIME_FAILED = "commands.worldborder.warning.time.failed" => "Nothing changed. The world border warning is already that amount of time";

    // spreadplayers
    COMMANDS_SPREADPLAYERS_SUCCESS_TEAMS = "commands.spreadplayers.success.teams" => "Spread %s team(s) around %s, %s with an average distance of %s blocks apart";
    COMMANDS_SPREADPLAYERS_SUCCESS_ENTITIES = "commands.spreadplayers.success.entities" => "Spread %s entities around %s, %s with an average distance of %s blocks apart";
    COMMANDS_SPREADPLAYERS_FAILED_TEAMS = "commands.spreadplayers.failed.teams" => "Could not spread %s team(s) around %s, %s (too many entities for space - try using spread of at most %s)";
    COMMANDS_SPREADPLAYERS_FAILED_ENTITIES = "commands.spreadplayers.failed.entities" => "Could not spread %s entity/entities around %s, %s (too many entities for space - try using spread of at most %s)";
    COMMANDS_SPREADPLAYERS_FAILED_INVALID_HEIGHT = "commands.spreadplayers.failed.invalid.height" => "Invalid maxHeight %s; expected higher than world minimum %s";

    // kill, damage, summon
    COMMANDS_KILL_SUCCESS_SINGLE = "commands.kill.success.single" => "Killed %s";
    COMMANDS_KILL_SUCCESS_MULTIPLE = "commands.kill.success.multiple" => "Killed %s entities";
    COMMANDS_DAMAGE_SUCCESS = "commands.damage.success" => "Applied %s damage to %s";
    COMMANDS_DAMAGE_INVULNERABLE = "commands.damage.invulnerable" => "Target is invulnerable to the given damage type";
    COMMANDS_SUMMON_SUCCESS = "commands.summon.success" => "Summoned new %s";
    COMMANDS_SUMMON_FAILED = "commands.summon.failed" => "Unable to summon entity";
    COMMANDS_SUMMON_FAILED_PEACEFUL = "commands.summon.failed.peaceful" => "Monsters cannot be summoned in Peaceful difficulty";
    COMMANDS_SUMMON_INVALIDPOSITION = "commands.summon.invalidPosition" => "Invalid position for summon";

    // gamemode, difficulty, weather, time
    COMMANDS_GAMEMODE_SUCCESS_SELF = "commands.gamemode.success.self" => "Set own game mode to %s";
    COMMANDS_GAMEMODE_SUCCESS_OTHER = "commands.gamemode.success.other" => "Set %s's game mode to %s";
    COMMANDS_DIFFICULTY_SUCCESS = "commands.difficulty.success" => "The difficulty has been set to %s";
    COMMANDS_DIFFICULTY_FAILURE = "commands.difficulty.failure" => "The difficulty did not change; it is already set to %s";
    COMMANDS_DIFFICULTY_QUERY = "commands.difficulty.query" => "The difficulty is %s";
    COMMANDS_WEATHER_SET_CLEAR = "commands.weather.set.clear" => "Set the weather to clear";
    COMMANDS_WEATHER_SET_RAIN = "commands.weather.set.rain" => "Set the weather to rain";
    COMMANDS_WEATHER_SET_THUNDER = "commands.weather.set.thunder" => "Set the weather to rain & thunder";
    COMMANDS_TIME_SET = "commands.time.set" => "Set the time to %s";
    COMMANDS_TIME_QUERY = "commands.time.query" => "The time is %s";

    // tag
    COMMANDS_TAG_ADD_SUCCESS_SINGLE = "commands.tag.add.success.single" => "Added tag '%s' to %s";
    COMMANDS_TAG_ADD_SUCCESS_MULTIPLE = "commands.tag.add.success.multiple" => "Added tag '%s' to %s entities";
    COMMANDS_TAG_ADD_FAILED = "commands.tag.add.failed" => "Target either already has the tag or has too many tags";
    COMMANDS_TAG_REMOVE_SUCCESS_SINGLE = "commands.tag.remove.success.single" => "Removed tag '%s' from %s";
    COMMANDS_TAG_REMOVE_SUCCESS_MULTIPLE = "commands.tag.remove.success.multiple" => "Removed tag '%s' from %s entities";
    COMMANDS_TAG_REMOVE_FAILED = "commands.tag.remove.failed" => "Target does not have this tag";
    COMMANDS_TAG_LIST_SINGLE_EMPTY = "commands.tag.list.single.empty" => "%s has no tags";
    COMMANDS_TAG_LIST_SINGLE_SUCCESS = "commands.tag.list.single.success" => "%s has %s tags: %s";
    COMMANDS_TAG_LIST_MULTIPLE_EMPTY = "commands.tag.list.multiple.empty" => "There are no tags on the %s entities";
    COMMANDS_TAG_LIST_MULTIPLE_SUCCESS = "commands.tag.list.multiple.success" => "The %s entities have %s total tags: %s";

    // blocks
    COMMANDS_SETBLOCK_SUCCESS = "commands.setblock.success" => "Changed the block at %s, %s, %s";
    COMMANDS_SETBLOCK_FAILED = "commands.setblock.failed" => "Could not set the block";
    COMMANDS_FILL_SUCCESS = "commands.fill.success" => "Successfully filled %s block(s)";
    COMMANDS_FILL_FAILED = "commands.fill.failed" => "No blocks were filled";
    COMMANDS_FILL_TOOBIG = "commands.fill.toobig" => "Too many blocks in the specified area (maximum %s, specified %s)";
    COMMANDS_SETWORLDSPAWN_SUCCESS = "commands.setworldspawn.success" => "Set the world spawn point to %s, %s, %s [%s]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_resolve_to_english() {
        assert_eq!(
            COMMANDS_TEAM_ADD_SUCCESS
                .message([TextComponent::plain("red")])
                .to_plain(),
            "Created team red"
        );
        assert_eq!(
            COMMANDS_TEAM_OPTION_COLLISIONRULE_SUCCESS
                .message([TextComponent::plain("red"), TextComponent::plain("never")])
                .to_plain(),
            "Collision rule for team red is now \"never\""
        );
        assert!(TRANSLATIONS.contains_key(COMMANDS_EXECUTE_CONDITIONAL_PASS.key));
    }
}
