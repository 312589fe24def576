//! Canned CMake help output.

use cmake_tmlanguage::cmake::MockCMakeClient;
use cmake_tmlanguage::config::ExtractionConfig;
use cmake_tmlanguage::language::LanguageTag;

pub const VERSION: &str = "cmake version 3.28.3\n\nCMake suite maintained and supported by Kitware (kitware.com/cmake).";

pub const VARIABLE_LIST: &str = "\
CMAKE_BUILD_TYPE
CMAKE_<LANG>_COMPILER
CMAKE_<LANG>_FLAGS_<CONFIG>
CMAKE_<CONFIG>_POSTFIX

PROJECT_NAME
";

pub const PROPERTY_LIST: &str = "\
<LANG>_STANDARD
COMPILE_DEFINITIONS
MAP_IMPORTED_CONFIG_<CONFIG>
";

pub const COMMAND_LIST: &str = "\
add_library
cmake_policy
else
endif
foreach
if
";

pub const ADD_LIBRARY_HELP: &str = "\
add_library
-----------

.. code-block:: cmake

  add_library(<name> [STATIC | SHARED | MODULE]
              [EXCLUDE_FROM_ALL]
              [<source>...])

.. code-block:: cmake

  add_library(<name> OBJECT [<source>...])
";

pub const CMAKE_POLICY_HELP: &str = "\
cmake_policy
------------

Manage Policy Settings. See the NEW and OLD behavior docs.
";

pub const FOREACH_HELP: &str = "\
foreach
-------

.. code-block:: cmake

  foreach(<loop_var> RANGE <stop>)
  foreach(<loop_var> IN [LISTS [<lists>]] [ITEMS [<items>]])
";

pub const GENEX_MANUAL: &str = "\
Conditional Expressions
=======================

.. genex:: $<IF:condition,true_string,false_string>

  Evaluates to ``true_string`` if ``condition`` is ``1``.

.. genex:: $<CONFIG:cfgs>

  ``1`` if config is any one of the entries in comma-separated list
  ``cfgs``, else ``0``. See also $<CONFIG> and
  $<TARGET_FILE:tgt>.
";

pub const FETCH_CONTENT_HELP: &str = "\
FetchContent
------------

.. command:: FetchContent_Declare

  .. code-block:: cmake

    FetchContent_Declare(<name> <contentOptions>... [SYSTEM] [EXCLUDE_FROM_ALL])

.. command:: FetchContent_MakeAvailable

  .. code-block:: cmake

    FetchContent_MakeAvailable(<name1> [<name2>...])

  Uses the GIT_REPOSITORY and GIT_TAG details given to the VS IDE.
";

/// A client answering every query a full run issues.
pub fn mock_cmake() -> MockCMakeClient {
    MockCMakeClient::new()
        .with_response("--version", VERSION)
        .with_response("--help-variable-list", VARIABLE_LIST)
        .with_response("--help-property-list", PROPERTY_LIST)
        .with_response("--help-command-list", COMMAND_LIST)
        .with_response("--help-command add_library", ADD_LIBRARY_HELP)
        .with_response("--help-command cmake_policy", CMAKE_POLICY_HELP)
        .with_response("--help-command foreach", FOREACH_HELP)
        .with_response("--help-manual cmake-generator-expressions", GENEX_MANUAL)
        .with_response("--help-module FetchContent", FETCH_CONTENT_HELP)
}

/// Extraction rules matching [`mock_cmake`].
pub fn extraction_config() -> ExtractionConfig {
    ExtractionConfig {
        languages: vec![LanguageTag::C, LanguageTag::Cxx],
        modules: vec!["FetchContent".to_string()],
        ..Default::default()
    }
}
